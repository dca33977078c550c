//! Project submission form.
//!
//! # Responsibility
//! - Hold raw form values and validate them on submit.
//! - Create a project for valid input, then clear the form.
//!
//! # Invariants
//! - Invalid input never reaches `ProjectStore::create_project`.
//! - Field values are kept as typed when validation fails.

use crate::config::InputConstraints;
use crate::model::project::ProjectId;
use crate::state::project_store::ProjectStore;
use crate::validation::{validate, Validatable};
use crate::view::Component;
use log::warn;
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

const INPUT_ELEMENT_ID: &str = "user-input";

/// Form field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
    People,
}

impl InputField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    InvalidInput(InputField),
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(field) => write!(f, "Invalid input! ({})", field.as_str()),
        }
    }
}

impl Error for InputError {}

/// Validated form values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

#[derive(Debug, Default)]
struct FormFields {
    title: String,
    description: String,
    people: String,
}

pub struct ProjectInput {
    store: Rc<ProjectStore>,
    constraints: InputConstraints,
    fields: RefCell<FormFields>,
}

impl ProjectInput {
    pub fn new(store: Rc<ProjectStore>, constraints: InputConstraints) -> Self {
        let input = Self {
            store,
            constraints,
            fields: RefCell::new(FormFields::default()),
        };
        input.configure();
        input
    }

    pub fn set_title(&self, value: impl Into<String>) {
        self.fields.borrow_mut().title = value.into();
    }

    pub fn set_description(&self, value: impl Into<String>) {
        self.fields.borrow_mut().description = value.into();
    }

    pub fn set_people(&self, value: impl Into<String>) {
        self.fields.borrow_mut().people = value.into();
    }

    /// Current raw `(title, description, people)` values.
    pub fn values(&self) -> (String, String, String) {
        let fields = self.fields.borrow();
        (
            fields.title.clone(),
            fields.description.clone(),
            fields.people.clone(),
        )
    }

    /// Validates the current values.
    ///
    /// The first failing field is reported. People must be a whole number
    /// inside the configured range.
    pub fn gather_user_input(&self) -> Result<ProjectDraft, InputError> {
        let fields = self.fields.borrow();
        let people = fields.people.trim().parse::<f64>().unwrap_or(f64::NAN);

        let title_ok = validate(&Validatable::text(fields.title.as_str()).required());
        let description_ok = validate(
            &Validatable::text(fields.description.as_str())
                .required()
                .min_length(self.constraints.description_min_len),
        );
        let people_ok = validate(
            &Validatable::number(people)
                .required()
                .min(f64::from(self.constraints.people_min))
                .max(f64::from(self.constraints.people_max)),
        ) && people.fract() == 0.0;

        if !title_ok {
            return Err(InputError::InvalidInput(InputField::Title));
        }
        if !description_ok {
            return Err(InputError::InvalidInput(InputField::Description));
        }
        if !people_ok {
            return Err(InputError::InvalidInput(InputField::People));
        }

        Ok(ProjectDraft {
            title: fields.title.clone(),
            description: fields.description.clone(),
            people: people as u32,
        })
    }

    /// Handles a form submit.
    ///
    /// On success the project is created and the form cleared. On failure the
    /// error is the user-facing notification and nothing is created.
    pub fn submit_handler(&self) -> Result<ProjectId, InputError> {
        let draft = match self.gather_user_input() {
            Ok(draft) => draft,
            Err(err) => {
                warn!(
                    "event=project_submit module=view status=rejected reason={}",
                    err
                );
                return Err(err);
            }
        };

        let id = self
            .store
            .create_project(draft.title, draft.description, draft.people);
        self.clear_inputs();
        Ok(id)
    }

    fn clear_inputs(&self) {
        *self.fields.borrow_mut() = FormFields::default();
    }
}

impl Component for ProjectInput {
    fn element_id(&self) -> &str {
        INPUT_ELEMENT_ID
    }

    // Submits arrive through `submit_handler`.
    fn configure(&self) {}

    // The form has no store-derived content.
    fn render_content(&self) {}
}
