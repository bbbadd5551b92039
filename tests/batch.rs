mod common;

#[cfg(test)]
mod tests {
    use crate::common::{PAGE_VIEWS, USERS, init_logs};
    use indoc::indoc;
    use turret::{
        BatchQuery, BatchType, Consistency, SerialConsistency, Statement, Table, Value,
    };

    #[test]
    fn batch_logged() {
        init_logs();
        let batch = BatchQuery::logged()
            .add(
                USERS
                    .update()
                    .where_(USERS.id.eq_param())
                    .modify(USERS.city.set_param()),
            )
            .add(USERS.insert().value(|t| t.id, "b").value_param(|t| t.age))
            .add(USERS.delete().where_(USERS.id.eq("c")))
            .consistency_level(Consistency::Quorum);
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.batch_type(), BatchType::Logged);
        assert_eq!(
            batch.query_text().as_str(),
            indoc! {"
                BEGIN BATCH
                    UPDATE users SET city = ? WHERE id = ?;
                    INSERT INTO users (id, age) VALUES ('b', ?);
                    DELETE FROM users WHERE id = 'c';
                APPLY BATCH
            "}
            .trim()
        );
        let prepared = batch.prepare();
        assert_eq!(prepared.types().len(), 3);
        assert_eq!(prepared.consistency(), Some(Consistency::Quorum));
        assert_eq!(prepared.routing_tokens().len(), 2);
        let bound = prepared.bind(("Berlin", "a", 21));
        assert_eq!(
            bound.values,
            [
                Value::Varchar(Some("Berlin".into())),
                Value::Varchar(Some("a".into())),
                Value::Int32(Some(21)),
            ]
        );
    }

    #[test]
    fn batch_counter() {
        let batch = BatchQuery::counter()
            .add(
                PAGE_VIEWS
                    .update()
                    .where_(PAGE_VIEWS.page.eq("home"))
                    .modify(PAGE_VIEWS.views.increment(1)),
            )
            .add(
                PAGE_VIEWS
                    .update()
                    .where_(PAGE_VIEWS.page.eq("about"))
                    .modify(PAGE_VIEWS.views.decrement(1)),
            );
        assert_eq!(
            batch.query_text().as_str(),
            indoc! {"
                BEGIN COUNTER BATCH
                    UPDATE page_views SET views = views + 1 WHERE page = 'home';
                    UPDATE page_views SET views = views - 1 WHERE page = 'about';
                APPLY BATCH
            "}
            .trim()
        );
    }

    #[test]
    fn batch_timestamp_and_conditions() {
        let batch = BatchQuery::unlogged().timestamp(42).add(
            USERS
                .update()
                .where_(USERS.id.eq("a"))
                .modify(USERS.age.set(1))
                .if_exists()
                .serial_consistency_level(SerialConsistency::LocalSerial),
        );
        assert_eq!(
            batch.query_text().as_str(),
            indoc! {"
                BEGIN UNLOGGED BATCH USING TIMESTAMP 42
                    UPDATE users SET age = 1 WHERE id = 'a' IF EXISTS;
                APPLY BATCH
            "}
            .trim()
        );
        assert_eq!(
            batch.serial_consistency(),
            Some(SerialConsistency::LocalSerial)
        );
    }

    #[test]
    fn batch_empty() {
        let batch = BatchQuery::new(BatchType::default());
        assert!(batch.is_empty());
        assert_eq!(batch.query_text().as_str(), "BEGIN BATCH\nAPPLY BATCH");
        assert!(batch.prepare().types().is_empty());
    }
}
