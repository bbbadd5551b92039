#[cfg(test)]
mod tests {
    use turret::{
        BatchType, HNil, Operator, ParamList, QueryBuilder, QueryCondition, QueryText, Value,
        hlist,
    };

    #[test]
    fn query_text_append() {
        let text = QueryText::from("SELECT * FROM t");
        assert_eq!(text.append(""), text);
        assert_eq!(QueryText::empty().append(&text), text);
        assert_eq!(text.append("LIMIT 1").as_str(), "SELECT * FROM t LIMIT 1");
        assert_eq!(text.prepend("EXPLAIN").as_str(), "EXPLAIN SELECT * FROM t");
        assert_eq!(text.as_str(), "SELECT * FROM t");
        assert_eq!(QueryText::from("f").concat("(x)").as_str(), "f(x)");
        assert_eq!(QueryText::from("a, b").wrap("(", ")").as_str(), "(a, b)");
    }

    #[test]
    fn query_text_join() {
        assert_eq!(QueryText::join(["a", "", "b"], ", ").as_str(), "a, b");
        assert!(QueryText::join([""; 3], ", ").is_empty());
        assert_eq!(
            QueryText::join(Vec::<QueryText>::new(), " AND "),
            QueryText::empty()
        );
    }

    #[test]
    fn query_text_placeholders() {
        assert_eq!(QueryText::from("a = ? AND b IN ?").placeholders(), 2);
        assert_eq!(QueryText::from("a = '?' AND \"?\" = ?").placeholders(), 1);
        assert_eq!(QueryText::from("a = 'it''s?' AND b = ?").placeholders(), 1);
        assert_eq!(QueryText::empty().placeholders(), 0);
    }

    #[test]
    fn query_builder_fragments() {
        assert_eq!(QueryBuilder::identifier("user_id").as_str(), "user_id");
        assert_eq!(QueryBuilder::identifier("userId").as_str(), "\"userId\"");
        assert_eq!(QueryBuilder::identifier("select").as_str(), "\"select\"");
        assert_eq!(QueryBuilder::identifier("a\"b").as_str(), "\"a\"\"b\"");
        assert_eq!(QueryBuilder::keyspace("", "t").as_str(), "t");
        assert_eq!(QueryBuilder::keyspace("ks", "t").as_str(), "ks.t");
        assert_eq!(
            QueryBuilder::compare("a", Operator::ContainsKey, "'k'").as_str(),
            "a CONTAINS KEY 'k'"
        );
        assert_eq!(QueryBuilder::using([] as [&str; 0]), QueryText::empty());
        assert_eq!(
            QueryBuilder::using(["TTL 1", "TIMESTAMP 2"]).as_str(),
            "USING TTL 1 AND TIMESTAMP 2"
        );
        assert_eq!(QueryBuilder::token(["a", "b"]).as_str(), "token(a, b)");
        assert_eq!(
            QueryBuilder::delete([] as [&str; 0], "t").as_str(),
            "DELETE FROM t"
        );
        assert_eq!(
            QueryBuilder::batch(BatchType::Unlogged, "", ["A", "B"]).as_str(),
            "BEGIN UNLOGGED BATCH\n    A;\n    B;\nAPPLY BATCH"
        );
    }

    #[test]
    fn query_condition_params() {
        type P = hlist![i32, Vec<String>, Option<f64>];
        assert_eq!(P::LEN, 3);
        assert_eq!(HNil::LEN, 0);
        assert_eq!(
            P::types(),
            [
                Value::Int32(None),
                Value::List(None, Box::new(Value::Varchar(None))),
                Value::Float64(None),
            ]
        );
        let a = QueryCondition::<hlist![i32]>::new("x = ?".into());
        let b = QueryCondition::<hlist![String]>::new("y = ?".into());
        let joined = a.join(b, ", ");
        assert_eq!(joined.qb().as_str(), "x = ?, y = ?");
        assert_eq!(joined.qb().placeholders(), 2);
    }
}
