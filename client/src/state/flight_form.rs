//! Flight form state machine for the create, edit, and view modes.
//!
//! DESIGN
//! ======
//! The mode is fixed when the route is resolved. Field enablement follows
//! from the mode: create locks status to `SCHEDULED`, edit locks airline and
//! destination, view locks everything. Validation only looks at enabled
//! fields, and payloads are built from the mode so a create never carries a
//! status and an update never carries airline or destination.
//!
//! Edit submissions go through a confirmation step: [`FlightForm::submit`]
//! opens it and [`FlightForm::confirm_update`] hands back the patch to send.

#[cfg(test)]
#[path = "flight_form_test.rs"]
mod flight_form_test;

use flights::{
    ApiError, CreateFlightRequest, FieldError, Flight, FlightField, FlightStatus, UpdateFlightRequest,
    to_datetime_input,
};

use super::toast::Notice;

/// Delay before leaving the page after a successful create/update.
pub const REDIRECT_AFTER_SAVE_MS: u64 = 1500;
/// Delay before leaving the page after the record failed to load.
pub const REDIRECT_AFTER_LOAD_FAILURE_MS: u64 = 2000;
/// Where the form navigates back to.
pub const LIST_PATH: &str = "/flights";

pub const CREATE_SUCCEEDED: &str = "Flight created successfully!";
pub const UPDATE_SUCCEEDED: &str = "Flight updated successfully!";
pub const CREATE_FAILED: &str = "Failed to create flight. Please try again.";
pub const UPDATE_FAILED: &str = "Failed to update flight. Please try again.";
pub const LOAD_FAILED: &str = "Failed to load flight data. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
    View,
}

impl FormMode {
    /// Resolve the mode from route parameters.
    ///
    /// No id means create. With an id, `edit` selects edit mode and any
    /// other action (or none) selects view.
    #[must_use]
    pub fn from_route(has_id: bool, action: Option<&str>) -> Self {
        match (has_id, action) {
            (false, _) => Self::Create,
            (true, Some("edit")) => Self::Edit,
            (true, _) => Self::View,
        }
    }
}

/// One input's value and interaction flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub enabled: bool,
    pub touched: bool,
}

impl FieldState {
    fn editable(value: impl Into<String>) -> Self {
        Self { value: value.into(), enabled: true, touched: false }
    }
}

/// What the page should do after [`FlightForm::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitAction {
    /// Validation failed; the error notice names the first bad field.
    Blocked,
    /// Send this create request.
    Create(CreateFlightRequest),
    /// The update confirmation dialog is now open.
    Confirm,
    /// Nothing to do (view mode, or a request is already running).
    Ignored,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlightForm {
    pub mode: FormMode,
    pub flight_id: Option<i64>,
    /// Record as loaded, for edit and view.
    pub flight: Option<Flight>,
    fields: [FieldState; 5],
    pub loading: bool,
    pub editing_gate: bool,
    gate_before_edit: String,
    pub show_confirmation: bool,
    pub error: Notice,
    pub success: Notice,
}

fn slot(field: FlightField) -> usize {
    match field {
        FlightField::Airline => 0,
        FlightField::Destination => 1,
        FlightField::Gate => 2,
        FlightField::DepartureTime => 3,
        FlightField::Status => 4,
    }
}

impl FlightForm {
    fn blank(mode: FormMode, flight_id: Option<i64>) -> Self {
        Self {
            mode,
            flight_id,
            flight: None,
            fields: [
                FieldState::editable(""),
                FieldState::editable(""),
                FieldState::editable(""),
                FieldState::editable(""),
                FieldState::editable(FlightStatus::Scheduled.as_str()),
            ],
            loading: false,
            editing_gate: false,
            gate_before_edit: String::new(),
            show_confirmation: false,
            error: Notice::default(),
            success: Notice::default(),
        }
    }

    /// Empty create form. Status is fixed to `SCHEDULED` and disabled.
    #[must_use]
    pub fn create() -> Self {
        let mut form = Self::blank(FormMode::Create, None);
        form.fields[slot(FlightField::Status)].enabled = false;
        form
    }

    /// Form for an existing record, waiting for [`FlightForm::load_succeeded`].
    #[must_use]
    pub fn existing(mode: FormMode, id: i64) -> Self {
        if mode == FormMode::Create {
            return Self::create();
        }
        let mut form = Self::blank(mode, Some(id));
        form.loading = true;
        form
    }

    /// Form for route parameters. An unparseable id still selects edit/view
    /// and reports a load failure.
    #[must_use]
    pub fn from_route(id: Option<&str>, action: Option<&str>) -> (Self, Option<i64>) {
        let mode = FormMode::from_route(id.is_some(), action);
        match (mode, id.map(str::parse::<i64>)) {
            (FormMode::Create, _) | (_, None) => (Self::create(), None),
            (_, Some(Ok(id))) => (Self::existing(mode, id), Some(id)),
            (_, Some(Err(_))) => {
                let mut form = Self::blank(mode, None);
                form.disable_all();
                form.error.show(LOAD_FAILED);
                (form, None)
            }
        }
    }

    #[must_use]
    pub fn field(&self, field: FlightField) -> &FieldState {
        &self.fields[slot(field)]
    }

    #[must_use]
    pub fn value(&self, field: FlightField) -> &str {
        &self.field(field).value
    }

    #[must_use]
    pub fn is_enabled(&self, field: FlightField) -> bool {
        self.field(field).enabled
    }

    /// Set a field from user input. Disabled fields are left untouched.
    pub fn set_value(&mut self, field: FlightField, value: impl Into<String>) -> bool {
        let state = &mut self.fields[slot(field)];
        if !state.enabled {
            return false;
        }
        state.value = value.into();
        true
    }

    pub fn touch(&mut self, field: FlightField) {
        self.fields[slot(field)].touched = true;
    }

    fn patch(&mut self, field: FlightField, value: impl Into<String>) {
        self.fields[slot(field)].value = value.into();
    }

    fn disable(&mut self, field: FlightField) {
        self.fields[slot(field)].enabled = false;
    }

    fn disable_all(&mut self) {
        for state in &mut self.fields {
            state.enabled = false;
        }
    }

    /// Fill the form from a fetched record according to the mode.
    pub fn load_succeeded(&mut self, flight: Flight) {
        self.loading = false;
        self.patch(FlightField::Airline, flight.airline.clone());
        self.patch(FlightField::Destination, flight.destination.clone());
        self.patch(FlightField::Gate, flight.gate.clone());
        self.patch(FlightField::Status, flight.status.as_str());
        match self.mode {
            FormMode::View => {
                self.patch(FlightField::DepartureTime, flight.departure_time.clone());
                self.disable_all();
            }
            FormMode::Edit => {
                self.patch(FlightField::DepartureTime, to_datetime_input(&flight.departure_time));
                self.disable(FlightField::Airline);
                self.disable(FlightField::Destination);
            }
            FormMode::Create => {}
        }
        self.flight = Some(flight);
    }

    /// Record a failed fetch. The page navigates back after
    /// [`REDIRECT_AFTER_LOAD_FAILURE_MS`].
    pub fn load_failed(&mut self, err: &ApiError) {
        self.loading = false;
        self.error.show(err.user_message(LOAD_FAILED));
    }

    /// Rule violation for an enabled field, if any.
    #[must_use]
    pub fn field_error(&self, field: FlightField) -> Option<FieldError> {
        let state = self.field(field);
        if !state.enabled {
            return None;
        }
        field.check(&state.value).err()
    }

    /// Violation to display under an input: only once it has been touched.
    #[must_use]
    pub fn visible_error(&self, field: FlightField) -> Option<FieldError> {
        if self.field(field).touched { self.field_error(field) } else { None }
    }

    /// First invalid enabled field in display order.
    #[must_use]
    pub fn first_invalid(&self) -> Option<FlightField> {
        FlightField::ALL.into_iter().find(|f| self.field_error(*f).is_some())
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_invalid().is_none()
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        match self.mode {
            FormMode::View => false,
            FormMode::Create | FormMode::Edit => self.is_valid(),
        }
    }

    /// Handle the submit button.
    pub fn submit(&mut self) -> SubmitAction {
        if self.mode == FormMode::View || self.loading {
            return SubmitAction::Ignored;
        }
        if let Some(field) = self.first_invalid() {
            for state in &mut self.fields {
                state.touched = true;
            }
            self.error.show(field.invalid_message());
            return SubmitAction::Blocked;
        }
        match self.mode {
            FormMode::Create => {
                self.loading = true;
                SubmitAction::Create(self.create_request())
            }
            FormMode::Edit => {
                self.show_confirmation = true;
                SubmitAction::Confirm
            }
            FormMode::View => SubmitAction::Ignored,
        }
    }

    fn create_request(&self) -> CreateFlightRequest {
        CreateFlightRequest {
            airline: self.value(FlightField::Airline).to_owned(),
            destination: self.value(FlightField::Destination).to_owned(),
            gate: self.value(FlightField::Gate).to_owned(),
            departure_time: self.value(FlightField::DepartureTime).to_owned(),
        }
    }

    fn update_request(&self) -> UpdateFlightRequest {
        UpdateFlightRequest {
            status: FlightStatus::parse(self.value(FlightField::Status)),
            gate: Some(self.value(FlightField::Gate).to_owned()),
            departure_time: Some(self.value(FlightField::DepartureTime).to_owned()),
        }
    }

    /// Accept the confirmation dialog, returning the patch to send.
    pub fn confirm_update(&mut self) -> Option<(i64, UpdateFlightRequest)> {
        if self.mode != FormMode::Edit || !self.show_confirmation {
            return None;
        }
        self.show_confirmation = false;
        let id = self.flight_id?;
        self.loading = true;
        Some((id, self.update_request()))
    }

    /// Dismiss the confirmation dialog and keep editing.
    pub fn cancel_update(&mut self) {
        self.show_confirmation = false;
    }

    /// Record a successful create/update. The page navigates back after
    /// [`REDIRECT_AFTER_SAVE_MS`].
    pub fn save_succeeded(&mut self) {
        let message = if self.mode == FormMode::Create { CREATE_SUCCEEDED } else { UPDATE_SUCCEEDED };
        self.success.show(message);
    }

    pub fn save_failed(&mut self, err: &ApiError) {
        self.loading = false;
        let fallback = if self.mode == FormMode::Create { CREATE_FAILED } else { UPDATE_FAILED };
        self.error.show(err.user_message(fallback));
    }

    /// Begin inline gate editing, remembering the current value.
    pub fn start_edit_gate(&mut self) {
        if self.mode != FormMode::Edit {
            return;
        }
        self.gate_before_edit = self.value(FlightField::Gate).to_owned();
        self.editing_gate = true;
        self.fields[slot(FlightField::Gate)].enabled = true;
    }

    /// Keep the edited gate value.
    pub fn save_gate(&mut self) {
        self.editing_gate = false;
    }

    /// Restore the gate value from before editing began.
    pub fn cancel_edit_gate(&mut self) {
        if !self.editing_gate {
            return;
        }
        self.editing_gate = false;
        let previous = std::mem::take(&mut self.gate_before_edit);
        self.patch(FlightField::Gate, previous);
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => "Create Flight".to_owned(),
            FormMode::Edit => "Edit Flight".to_owned(),
            FormMode::View => {
                let number = self.flight.as_ref().map_or("", |f| f.flight_number.as_str());
                format!("Flight {number} Details")
            }
        }
    }

    /// Route that switches a viewed record into edit mode.
    #[must_use]
    pub fn edit_path(&self) -> Option<String> {
        self.flight_id.map(|id| format!("{LIST_PATH}/{id}/edit"))
    }
}
