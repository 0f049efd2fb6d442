#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use rollcall::db::attendance::AttendanceRecords;
    use rollcall::db::constraint::Constraint;
    use rollcall::db::db::Db;
    use rollcall::db::error::{ErrorKind, StoreError};
    use rollcall::db::students::Students;
    use rollcall::libs::attendance::NewAttendance;
    use rollcall::libs::config::DatabaseConfig;
    use rollcall::libs::student::{DateParts, NewStudent};
    use rusqlite::TransactionBehavior;
    use std::thread;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct UnitOfWorkTestContext {
        db: Db,
        temp_dir: TempDir,
    }

    impl TestContext for UnitOfWorkTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("rollcall.db"), &DatabaseConfig::default()).unwrap();
            UnitOfWorkTestContext { db, temp_dir }
        }
    }

    impl UnitOfWorkTestContext {
        fn reopen(&self, config: &DatabaseConfig) -> Db {
            Db::open(&self.temp_dir.path().join("rollcall.db"), config).unwrap()
        }
    }

    fn student(id: &str) -> NewStudent {
        NewStudent {
            student_id: id.to_string(),
            full_name: format!("Student {}", id),
            date_of_birth: DateParts::new(2, 2, 2002),
            email: format!("{}@example.com", id),
            phone_number: "555-0100".to_string(),
            address: "1 Main Street".to_string(),
            course: "Chemistry".to_string(),
            resume: None,
        }
    }

    fn march_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    fn nine() -> NaiveTime {
        NaiveTime::from_hms_opt(9, 0, 0).unwrap()
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_failed_unit_of_work_rolls_back(ctx: &mut UnitOfWorkTestContext) {
        let result: Result<(), StoreError> = ctx.db.unit_of_work(|tx| {
            tx.execute(
                "INSERT INTO students (student_id, full_name, date_of_birth, email, phone_number, address, course)
                 VALUES ('2001', 'Partial', '2000-01-01', 'p@example.com', '-', '-', '-')",
                [],
            )?;
            Err(StoreError::UnknownStudent("2001".to_string()))
        });

        assert!(result.is_err());
        assert!(Students::new(&ctx.db).list().is_empty());
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_successful_unit_of_work_commits(ctx: &mut UnitOfWorkTestContext) {
        let inserted = ctx
            .db
            .unit_of_work(|tx| {
                Ok(tx.execute(
                    "INSERT INTO students (student_id, full_name, date_of_birth, email, phone_number, address, course)
                     VALUES ('2001', 'Committed', '2000-01-01', 'c@example.com', '-', '-', '-')",
                    [],
                )?)
            })
            .unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(Students::new(&ctx.db).list().len(), 1);
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_foreign_key_is_enforced_on_pooled_connections(ctx: &mut UnitOfWorkTestContext) {
        let err = ctx
            .db
            .unit_of_work(|tx| {
                tx.execute(
                    "INSERT INTO attendance (student_id, attendance_date, check_in) VALUES ('7777', '2024-03-01', '09:00:00')",
                    [],
                )?;
                Ok(())
            })
            .unwrap_err();

        assert_eq!(err.constraint(), Some(Constraint::ForeignKey));
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_reads_degrade_to_empty_when_storage_fails(ctx: &mut UnitOfWorkTestContext) {
        let students = Students::new(&ctx.db);
        let records = AttendanceRecords::new(&ctx.db);
        students.register(&student("1001")).unwrap();
        records.mark(&NewAttendance::new("1001", march_first(), nine(), None)).unwrap();

        ctx.db
            .connection()
            .unwrap()
            .execute_batch("DROP TABLE attendance; DROP TABLE students;")
            .unwrap();

        assert!(students.list().is_empty());
        assert!(records.list().is_empty());
        assert!(students.try_list().is_err());
        assert!(records.try_list().is_err());
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_writes_surface_storage_failures(ctx: &mut UnitOfWorkTestContext) {
        ctx.db
            .connection()
            .unwrap()
            .execute_batch("DROP TABLE attendance; DROP TABLE students;")
            .unwrap();

        let err = Students::new(&ctx.db).register(&student("1001")).unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_pool_checkout_times_out(ctx: &mut UnitOfWorkTestContext) {
        let db = ctx.reopen(&DatabaseConfig {
            pool_size: 1,
            connection_timeout_ms: 100,
            ..DatabaseConfig::default()
        });

        let _held = db.connection().unwrap();
        let err = Students::new(&db).register(&student("1001")).unwrap_err();

        assert!(matches!(err, StoreError::Unavailable(_)));
        assert_eq!(err.kind(), ErrorKind::Unavailable);
        assert!(Students::new(&db).list().is_empty());
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_lock_wait_times_out(ctx: &mut UnitOfWorkTestContext) {
        let db = ctx.reopen(&DatabaseConfig {
            pool_size: 2,
            busy_timeout_ms: 50,
            ..DatabaseConfig::default()
        });

        let mut conn = db.connection().unwrap();
        let _tx = conn.transaction_with_behavior(TransactionBehavior::Immediate).unwrap();

        let err = Students::new(&db).register(&student("1001")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_racing_marks_commit_exactly_once(ctx: &mut UnitOfWorkTestContext) {
        Students::new(&ctx.db).register(&student("1001")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let db = ctx.db.clone();
                thread::spawn(move || {
                    AttendanceRecords::new(&db).mark(&NewAttendance::new("1001", march_first(), nine(), None))
                })
            })
            .collect();

        let results: Vec<Result<(), StoreError>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let successes = results.iter().filter(|r| r.is_ok()).count();
        let conflicts = results
            .iter()
            .filter(|r| matches!(r, Err(e) if e.kind() == ErrorKind::Conflict))
            .count();

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 7);
        assert_eq!(AttendanceRecords::new(&ctx.db).list().len(), 1);
    }

    #[test_context(UnitOfWorkTestContext)]
    #[test]
    fn test_concurrent_registrations_all_commit(ctx: &mut UnitOfWorkTestContext) {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let db = ctx.db.clone();
                thread::spawn(move || Students::new(&db).register(&student(&format!("30{:02}", i))))
            })
            .collect();

        for handle in handles {
            handle.join().unwrap().unwrap();
        }
        assert_eq!(Students::new(&ctx.db).list().len(), 8);
    }
}
