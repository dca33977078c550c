//! Form value validation.
//!
//! # Responsibility
//! - Check one raw input value against optional declared constraints.
//!
//! # Invariants
//! - `validate` is pure and total.
//! - Length constraints only apply to text; numeric bounds only to numbers.
//! - Absent constraints are not checked.

/// A raw form value.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    Text(String),
    Number(f64),
}

impl InputValue {
    fn as_trimmed_text(&self) -> String {
        match self {
            Self::Text(value) => value.trim().to_string(),
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Value plus the constraints it must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: InputValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    pub fn text(value: impl Into<String>) -> Self {
        Self::unconstrained(InputValue::Text(value.into()))
    }

    pub fn number(value: f64) -> Self {
        Self::unconstrained(InputValue::Number(value))
    }

    fn unconstrained(value: InputValue) -> Self {
        Self {
            value,
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// Returns whether `input` satisfies every declared constraint.
pub fn validate(input: &Validatable) -> bool {
    if input.required && input.value.as_trimmed_text().is_empty() {
        return false;
    }

    match &input.value {
        InputValue::Text(value) => {
            let length = value.trim().chars().count();
            if input.min_length.is_some_and(|min| length < min) {
                return false;
            }
            if input.max_length.is_some_and(|max| length > max) {
                return false;
            }
        }
        InputValue::Number(value) => {
            let bounded = input.min.is_some() || input.max.is_some();
            if bounded && value.is_nan() {
                return false;
            }
            if input.min.is_some_and(|min| *value < min) {
                return false;
            }
            if input.max.is_some_and(|max| *value > max) {
                return false;
            }
        }
    }

    true
}
