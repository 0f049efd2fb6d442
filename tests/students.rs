#[cfg(test)]
mod tests {
    use rollcall::db::db::Db;
    use rollcall::db::error::{ErrorKind, StoreError};
    use rollcall::db::students::Students;
    use rollcall::libs::config::DatabaseConfig;
    use rollcall::libs::student::{DateParts, NewStudent};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StudentsTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for StudentsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("rollcall.db"), &DatabaseConfig::default()).unwrap();
            StudentsTestContext { db, _temp_dir: temp_dir }
        }
    }

    fn student(id: &str, name: &str) -> NewStudent {
        NewStudent {
            student_id: id.to_string(),
            full_name: name.to_string(),
            date_of_birth: DateParts::new(14, 5, 2000),
            email: format!("{}@example.com", id),
            phone_number: "555-0100".to_string(),
            address: "1 Main Street".to_string(),
            course: "Physics".to_string(),
            resume: None,
        }
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_register_returns_student_id(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.db);

        let id = students.register(&student("1001", "Ada Lovelace")).unwrap();
        assert_eq!(id, "1001");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_list_contains_exactly_registered_students_by_name(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.db);

        students.register(&student("1003", "Grace Hopper")).unwrap();
        students.register(&student("1001", "Ada Lovelace")).unwrap();
        students.register(&student("1002", "Alan Turing")).unwrap();

        let listed = students.list();
        let names: Vec<&str> = listed.iter().map(|s| s.full_name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Alan Turing", "Grace Hopper"]);

        let ada = &listed[0];
        assert_eq!(ada.student_id, "1001");
        assert_eq!(ada.course, "Physics");
        assert_eq!(ada.email, "1001@example.com");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_duplicate_student_id_is_conflict(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.db);

        students.register(&student("1001", "Ada Lovelace")).unwrap();
        let err = students.register(&student("1001", "Someone Else")).unwrap_err();

        assert!(matches!(err, StoreError::DuplicateStudentId(ref id) if id == "1001"));
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let listed = students.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].full_name, "Ada Lovelace");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_invalid_date_of_birth_writes_nothing(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.db);
        let mut invalid = student("1001", "Ada Lovelace");
        invalid.date_of_birth = DateParts::new(31, 2, 2000);

        let err = students.register(&invalid).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate { day: 31, month: 2, year: 2000 }));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(students.list().is_empty());
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_blank_student_id_is_rejected(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.db);

        let err = students.register(&student("   ", "Nobody")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidIdentifier(_)));
        assert!(students.list().is_empty());
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_resume_and_date_of_birth_are_stored(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.db);
        let mut with_resume = student("1001", "Ada Lovelace");
        with_resume.resume = Some(vec![0x25, 0x50, 0x44, 0x46, 0x00, 0xff]);
        students.register(&with_resume).unwrap();
        students.register(&student("1002", "Alan Turing")).unwrap();

        let conn = ctx.db.connection().unwrap();
        let (dob, resume): (String, Option<Vec<u8>>) = conn
            .query_row(
                "SELECT date_of_birth, resume FROM students WHERE student_id = ?1",
                ["1001"],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(dob, "2000-05-14");
        assert_eq!(resume, Some(vec![0x25, 0x50, 0x44, 0x46, 0x00, 0xff]));

        let resume: Option<Vec<u8>> = conn
            .query_row("SELECT resume FROM students WHERE student_id = ?1", ["1002"], |row| row.get(0))
            .unwrap();
        assert!(resume.is_none());
    }
}
