mod common;

#[cfg(test)]
mod tests {
    use crate::common::{EVENTS, USERS};
    use turret::{Consistency, Statement, Table, Value};
    use uuid::Uuid;

    #[test]
    fn delete_rows() {
        let query = USERS.delete().where_(USERS.id.eq("a"));
        assert_eq!(query.query_text().as_str(), "DELETE FROM users WHERE id = 'a'");
        assert_eq!(query.routing_tokens().len(), 1);
    }

    #[test]
    fn delete_range() {
        let query = EVENTS
            .delete()
            .timestamp(99)
            .where_(EVENTS.device.eq(Uuid::nil()))
            .and(EVENTS.at.lt(100))
            .consistency_level(Consistency::All);
        assert_eq!(
            query.query_text().as_str(),
            "DELETE FROM telemetry.events USING TIMESTAMP 99 \
             WHERE device = 00000000-0000-0000-0000-000000000000 AND at < 100"
        );
        assert_eq!(query.consistency(), Some(Consistency::All));
    }

    #[test]
    fn delete_elements() {
        let query = USERS
            .delete_column(|t| t.scores.delete_index(2))
            .column(USERS.city.delete())
            .where_(USERS.id.eq("a"));
        assert_eq!(
            query.query_text().as_str(),
            "DELETE scores[2], city FROM users WHERE id = 'a'"
        );
    }

    #[test]
    fn delete_parameters_order() {
        let prepared = USERS
            .delete_column(|t| t.tags.delete_key_param())
            .where_(USERS.id.eq_param())
            .only_if(USERS.age.is_param())
            .prepare();
        assert_eq!(
            prepared.text().as_str(),
            "DELETE tags[?] FROM users WHERE id = ? IF age = ?"
        );
        assert_eq!(
            prepared.types(),
            [
                Value::Varchar(None),
                Value::Varchar(None),
                Value::Int32(None)
            ]
        );
        let bound = prepared.bind(("color", "a", 40));
        assert_eq!(
            bound.values,
            [
                Value::Varchar(Some("color".into())),
                Value::Varchar(Some("a".into())),
                Value::Int32(Some(40)),
            ]
        );
    }

    #[test]
    fn delete_conditional() {
        let query = USERS
            .delete()
            .where_(USERS.id.eq("a"))
            .only_if(USERS.city.is("Paris"))
            .and(USERS.age.is_lte(30));
        assert_eq!(
            query.query_text().as_str(),
            "DELETE FROM users WHERE id = 'a' IF city = 'Paris' AND age <= 30"
        );
        let query = USERS
            .delete_column(|t| t.nickname.delete())
            .where_(USERS.id.eq("a"))
            .if_exists();
        assert_eq!(
            query.query_text().as_str(),
            "DELETE nickname FROM users WHERE id = 'a' IF EXISTS"
        );
    }
}
