use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Employee,
    Employer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PosterType {
    Company,
    Individual,
}

/// The form variants a visitor can end up filling in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormVariant {
    Employee,
    Company,
    Individual,
}

impl FormVariant {
    /// Discriminator sent along with the submission as `role`.
    pub fn role_tag(&self) -> &'static str {
        match self {
            FormVariant::Employee => "employee",
            FormVariant::Company => "company",
            FormVariant::Individual => "individual",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormVariant::Employee => "Job Seeker Registration",
            FormVariant::Company => "Company Job Poster Registration",
            FormVariant::Individual => "Individual Job Poster Registration",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WizardStep {
    RoleSelect,
    EmployeeForm,
    PosterTypeSelect,
    CompanyForm,
    IndividualForm,
}

impl WizardStep {
    pub fn form_variant(&self) -> Option<FormVariant> {
        match self {
            WizardStep::EmployeeForm => Some(FormVariant::Employee),
            WizardStep::CompanyForm => Some(FormVariant::Company),
            WizardStep::IndividualForm => Some(FormVariant::Individual),
            WizardStep::RoleSelect | WizardStep::PosterTypeSelect => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::RoleSelect => "Choose Your Role",
            WizardStep::PosterTypeSelect => "Post a Job As",
            _ => self.form_variant().map(|v| v.title()).unwrap_or_default(),
        }
    }

    pub fn can_go_back(&self) -> bool {
        *self != WizardStep::RoleSelect
    }
}

pub enum WizardAction {
    SelectRole(Role),
    SelectPosterType(PosterType),
    GoBack,
}

/// Registration wizard state. `poster_type` only ever holds a value while
/// the role is `Employer`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WizardState {
    role: Option<Role>,
    poster_type: Option<PosterType>,
}

impl WizardState {
    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn poster_type(&self) -> Option<PosterType> {
        self.poster_type
    }

    pub fn step(&self) -> WizardStep {
        match (self.role, self.poster_type) {
            (None, _) => WizardStep::RoleSelect,
            (Some(Role::Employee), _) => WizardStep::EmployeeForm,
            (Some(Role::Employer), None) => WizardStep::PosterTypeSelect,
            (Some(Role::Employer), Some(PosterType::Company)) => WizardStep::CompanyForm,
            (Some(Role::Employer), Some(PosterType::Individual)) => WizardStep::IndividualForm,
        }
    }

    /// Applies an action, returning `None` when it doesn't apply to the
    /// current step.
    pub fn apply(&self, action: &WizardAction) -> Option<WizardState> {
        match (action, self.step()) {
            (WizardAction::SelectRole(role), WizardStep::RoleSelect) => Some(WizardState {
                role: Some(*role),
                poster_type: None,
            }),
            (WizardAction::SelectPosterType(poster_type), WizardStep::PosterTypeSelect) => {
                Some(WizardState {
                    role: self.role,
                    poster_type: Some(*poster_type),
                })
            }
            (WizardAction::GoBack, WizardStep::RoleSelect) => None,
            (WizardAction::GoBack, _) => {
                if self.poster_type.is_some() {
                    Some(WizardState {
                        role: self.role,
                        poster_type: None,
                    })
                } else {
                    Some(WizardState::default())
                }
            }
            _ => None,
        }
    }
}

impl Reducible for WizardState {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(&action) {
            Some(next) => {
                log::debug!("Wizard moved from {:?} to {:?}", self.step(), next.step());
                Rc::new(next)
            }
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(actions: Vec<WizardAction>) -> WizardState {
        actions
            .into_iter()
            .fold(Rc::new(WizardState::default()), |state, action| state.reduce(action))
            .as_ref()
            .clone()
    }

    #[test]
    fn starts_at_role_select() {
        let state = WizardState::default();
        assert_eq!(state.step(), WizardStep::RoleSelect);
        assert_eq!(state.role(), None);
        assert_eq!(state.poster_type(), None);
    }

    #[test]
    fn employee_then_back_returns_to_role_select() {
        let state = run(vec![WizardAction::SelectRole(Role::Employee), WizardAction::GoBack]);
        assert_eq!(state.step(), WizardStep::RoleSelect);
        assert_eq!(state, WizardState::default());
    }

    #[test]
    fn company_then_back_returns_to_poster_select() {
        let state = run(vec![
            WizardAction::SelectRole(Role::Employer),
            WizardAction::SelectPosterType(PosterType::Company),
            WizardAction::GoBack,
        ]);
        assert_eq!(state.step(), WizardStep::PosterTypeSelect);
        assert_eq!(state.role(), Some(Role::Employer));
        assert_eq!(state.poster_type(), None);
    }

    #[test]
    fn poster_type_ignored_for_employee() {
        let state = run(vec![
            WizardAction::SelectRole(Role::Employee),
            WizardAction::SelectPosterType(PosterType::Individual),
        ]);
        assert_eq!(state.step(), WizardStep::EmployeeForm);
        assert_eq!(state.poster_type(), None);
    }

    #[test]
    fn role_is_locked_until_going_back() {
        let state = run(vec![
            WizardAction::SelectRole(Role::Employer),
            WizardAction::SelectRole(Role::Employee),
        ]);
        assert_eq!(state.step(), WizardStep::PosterTypeSelect);

        let state = run(vec![
            WizardAction::SelectRole(Role::Employer),
            WizardAction::SelectPosterType(PosterType::Individual),
            WizardAction::GoBack,
            WizardAction::GoBack,
            WizardAction::SelectRole(Role::Employee),
        ]);
        assert_eq!(state.step(), WizardStep::EmployeeForm);
    }

    #[test]
    fn back_from_role_select_is_a_no_op() {
        let start = Rc::new(WizardState::default());
        let next = start.clone().reduce(WizardAction::GoBack);
        assert!(Rc::ptr_eq(&start, &next));
    }

    #[test]
    fn poster_type_only_set_for_employer_across_sequences() {
        let roles = [Role::Employee, Role::Employer];
        let posters = [PosterType::Company, PosterType::Individual];
        let mut actions = Vec::new();
        for round in 0..24usize {
            actions.push(match round % 4 {
                0 => WizardAction::SelectRole(roles[round / 4 % 2]),
                1 => WizardAction::SelectPosterType(posters[round / 8 % 2]),
                2 if round % 3 == 0 => WizardAction::GoBack,
                _ => WizardAction::SelectPosterType(posters[round % 2]),
            });
        }

        let mut state = Rc::new(WizardState::default());
        for action in actions {
            state = state.reduce(action);
            if state.role() != Some(Role::Employer) {
                assert_eq!(state.poster_type(), None);
            }
            let expected = match (state.role(), state.poster_type()) {
                (None, _) => WizardStep::RoleSelect,
                (Some(Role::Employee), _) => WizardStep::EmployeeForm,
                (Some(Role::Employer), None) => WizardStep::PosterTypeSelect,
                (Some(Role::Employer), Some(PosterType::Company)) => WizardStep::CompanyForm,
                (Some(Role::Employer), Some(PosterType::Individual)) => WizardStep::IndividualForm,
            };
            assert_eq!(state.step(), expected);
        }
    }

    #[test]
    fn form_steps_map_to_role_tags() {
        let company = run(vec![
            WizardAction::SelectRole(Role::Employer),
            WizardAction::SelectPosterType(PosterType::Company),
        ]);
        assert_eq!(company.step().form_variant().map(|v| v.role_tag()), Some("company"));
        assert_eq!(WizardStep::PosterTypeSelect.form_variant(), None);
        assert!(!WizardStep::RoleSelect.can_go_back());
        assert!(WizardStep::IndividualForm.can_go_back());
    }
}
