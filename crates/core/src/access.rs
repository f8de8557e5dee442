//! Role-based access policy for student data.
//!
//! The policy is a pure function over the tagged role carried by verified
//! claims. Handlers ask the policy, the policy never inspects token text.
//!
//! | resource                  | admin | guardian         | student  |
//! |---------------------------|-------|------------------|----------|
//! | list all students         | allow | deny             | deny     |
//! | list own students         | n/a   | allow (own only) | n/a      |
//! | read a student's payments | allow | iff owns student | iff self |
//! | read a student's balance  | allow | iff owns student | iff self |
//! | create a payment          | allow | deny             | deny     |

use uuid::Uuid;

use mensa_shared::auth::{Claims, Role};

/// The authenticated principal a request acts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// Role taken from verified claims.
    pub role: Role,
    /// Subject ID taken from verified claims.
    pub subject: Uuid,
}

impl Principal {
    /// Creates a principal from verified claims.
    #[must_use]
    pub const fn from_claims(claims: &Claims) -> Self {
        Self {
            role: claims.role,
            subject: claims.sub,
        }
    }

    /// May this principal list every student?
    #[must_use]
    pub fn can_list_all_students(&self) -> bool {
        matches!(self.role, Role::Admin)
    }

    /// Returns the guardian ID whose students this principal may list as
    /// "its own", or `None` for every other role.
    ///
    /// Administrators use the all-students listing instead; there is no
    /// "own students" scope for them.
    #[must_use]
    pub const fn guardian_scope(&self) -> Option<Uuid> {
        match self.role {
            Role::Guardian => Some(self.subject),
            Role::Admin | Role::Student => None,
        }
    }

    /// May this principal read the payments and balance of one student?
    ///
    /// `guardian_id` is the student's linked guardian, if any. The answer
    /// does not depend on whether the student exists, so a denied caller
    /// learns nothing about which IDs are real.
    #[must_use]
    pub fn can_view_student(&self, student_id: Uuid, guardian_id: Option<Uuid>) -> bool {
        match self.role {
            Role::Admin => true,
            Role::Guardian => guardian_id == Some(self.subject),
            Role::Student => student_id == self.subject,
        }
    }

    /// May this principal append payments to the ledger?
    #[must_use]
    pub fn can_record_payments(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn principal(role: Role) -> (Principal, Uuid) {
        let subject = Uuid::new_v4();
        (Principal { role, subject }, subject)
    }

    #[rstest]
    #[case(Role::Admin, true)]
    #[case(Role::Guardian, false)]
    #[case(Role::Student, false)]
    fn test_list_all_students_policy(#[case] role: Role, #[case] allowed: bool) {
        let (p, _) = principal(role);
        assert_eq!(p.can_list_all_students(), allowed);
    }

    #[rstest]
    #[case(Role::Admin, true)]
    #[case(Role::Guardian, false)]
    #[case(Role::Student, false)]
    fn test_record_payments_policy(#[case] role: Role, #[case] allowed: bool) {
        let (p, _) = principal(role);
        assert_eq!(p.can_record_payments(), allowed);
    }

    #[test]
    fn test_admin_views_any_student() {
        let (p, _) = principal(Role::Admin);
        assert!(p.can_view_student(Uuid::new_v4(), None));
        assert!(p.can_view_student(Uuid::new_v4(), Some(Uuid::new_v4())));
    }

    #[test]
    fn test_guardian_views_only_owned_students() {
        let (p, guardian_id) = principal(Role::Guardian);

        assert!(p.can_view_student(Uuid::new_v4(), Some(guardian_id)));
        assert!(!p.can_view_student(Uuid::new_v4(), Some(Uuid::new_v4())));
        // A student with no guardian link is not visible to any guardian
        assert!(!p.can_view_student(Uuid::new_v4(), None));
    }

    #[test]
    fn test_student_views_only_itself() {
        let (p, student_id) = principal(Role::Student);

        assert!(p.can_view_student(student_id, None));
        assert!(p.can_view_student(student_id, Some(Uuid::new_v4())));
        assert!(!p.can_view_student(Uuid::new_v4(), None));
    }

    #[rstest]
    #[case(Role::Admin, false)]
    #[case(Role::Guardian, true)]
    #[case(Role::Student, false)]
    fn test_guardian_scope_policy(#[case] role: Role, #[case] has_scope: bool) {
        let (p, subject) = principal(role);

        match p.guardian_scope() {
            Some(id) => {
                assert!(has_scope);
                assert_eq!(id, subject);
            }
            None => assert!(!has_scope),
        }
    }

    #[test]
    fn test_denial_is_independent_of_student_existence() {
        // Same answer for any student ID a non-owner guardian asks about,
        // so 403 responses carry no existence oracle.
        let (p, _) = principal(Role::Guardian);
        let foreign_guardian = Uuid::new_v4();

        let a = p.can_view_student(Uuid::new_v4(), Some(foreign_guardian));
        let b = p.can_view_student(Uuid::new_v4(), Some(foreign_guardian));
        assert_eq!(a, b);
        assert!(!a);
    }
}
