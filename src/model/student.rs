use serde::{Deserialize, Serialize};

/// A registered student profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub user: StudentAccount,
    pub name: String,
    pub phone_number: String,
    pub department: String,
    pub batch: String,
    pub year: u32,
}

/// The login account backing a [`Student`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentAccount {
    pub id: u32,
    pub email: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub date_joined: String,
}

/// The signed-in viewer as shown in the navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub department: String,
    pub batch: String,
    pub year: String,
}

/// One row of the admin user table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDataRow {
    pub status: bool,
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub batch: String,
    pub year: u32,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_uses_snake_case_fields() {
        let json = r#"{
            "id": 7,
            "user": {
                "id": 12,
                "email": "asha@college.edu",
                "is_staff": false,
                "is_superuser": false,
                "date_joined": "2024-08-01T10:00:00Z"
            },
            "name": "Asha",
            "phone_number": "9876543210",
            "department": "CSE",
            "batch": "A",
            "year": 3
        }"#;
        let student: Student = serde_json::from_str(json).unwrap();
        assert_eq!(student.user.email, "asha@college.edu");
        assert_eq!(student.phone_number, "9876543210");
        assert_eq!(student.year, 3);
    }
}
