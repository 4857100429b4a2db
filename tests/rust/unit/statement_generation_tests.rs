//! Statement generation through the public API
//!
//! Covers the documented scenarios for `dbo.Employee` plus the properties
//! every built statement must hold.

#[cfg(test)]
mod statement_generation_tests {
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};
    use temporal_sql::entity_catalog::EntityCatalog;
    use temporal_sql::temporal_query_generator::{IdentifierQuoting, PlaceholderStyle};
    use temporal_sql::{
        EntityDescriptor, ParameterValue, TableMapping, TableNameResolver, TemporalClauseBuilder,
        TemporalMode, TemporalQueryError,
    };

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    fn resolver() -> TableNameResolver<EntityCatalog> {
        TableNameResolver::new(
            EntityCatalog::new().with_entity("Employee", TableMapping::new("dbo", "Employee")),
        )
    }

    fn timestamps(parameters: &[ParameterValue]) -> Vec<DateTime<Utc>> {
        parameters.iter().filter_map(|p| p.as_timestamp()).collect()
    }

    #[test]
    fn test_employee_as_of_scenario() {
        let table = resolver().resolve(&EntityDescriptor::from("Employee")).unwrap();
        let statement = TemporalClauseBuilder::default()
            .build(&table, &TemporalMode::as_of(utc("2023-01-01T00:00:00Z")))
            .unwrap();

        assert_eq!(
            statement.sql(),
            "SELECT * FROM [dbo].[Employee] FOR SYSTEM_TIME AS OF ?"
        );
        assert_eq!(
            timestamps(statement.parameters()),
            vec![utc("2023-01-01T00:00:00Z")]
        );
        assert_eq!(statement.parameters()[0].to_string(), "2023-01-01T00:00:00Z");
    }

    #[test]
    fn test_employee_from_to_scenario() {
        let table = resolver().resolve(&EntityDescriptor::from("Employee")).unwrap();
        let mode = TemporalMode::from_to(utc("2020-01-01T00:00:00Z"), utc("2021-01-01T00:00:00Z"));
        let (sql, parameters) = TemporalClauseBuilder::default()
            .build(&table, &mode)
            .unwrap()
            .into_parts();

        assert_eq!(sql, "SELECT * FROM [dbo].[Employee] FOR SYSTEM_TIME FROM ? TO ?");
        assert_eq!(
            timestamps(&parameters),
            vec![utc("2020-01-01T00:00:00Z"), utc("2021-01-01T00:00:00Z")]
        );
    }

    #[test]
    fn test_all_has_no_placeholder() {
        let table = resolver().resolve(&EntityDescriptor::from("Employee")).unwrap();

        for style in [
            PlaceholderStyle::QuestionMark,
            PlaceholderStyle::AtName,
            PlaceholderStyle::Dollar,
        ] {
            let statement = TemporalClauseBuilder::new(style)
                .build(&table, &TemporalMode::All)
                .unwrap();
            assert!(statement.parameters().is_empty());
            assert!(
                !statement.sql().contains('?')
                    && !statement.sql().contains("@p")
                    && !statement.sql().contains('$'),
                "placeholder in {}",
                statement.sql()
            );
        }
    }

    #[test]
    fn test_same_instant_in_different_offsets() {
        let table = resolver().resolve(&EntityDescriptor::from("Employee")).unwrap();
        let builder = TemporalClauseBuilder::default();

        let offsets = [
            FixedOffset::east_opt(0).unwrap(),
            FixedOffset::east_opt(5 * 3600 + 1800).unwrap(),
            FixedOffset::west_opt(8 * 3600).unwrap(),
        ];
        let instant = utc("2023-06-15T12:30:00Z");

        let built: Vec<_> = offsets
            .iter()
            .map(|offset| {
                let local = instant.with_timezone(offset);
                builder.build(&table, &TemporalMode::as_of(local)).unwrap()
            })
            .collect();

        for statement in &built {
            assert_eq!(statement, &built[0]);
            assert_eq!(timestamps(statement.parameters()), vec![instant]);
        }
    }

    #[test]
    fn test_inverted_range_rejected_for_every_range_mode() {
        let table = resolver().resolve(&EntityDescriptor::from("Employee")).unwrap();
        let start = utc("2021-01-01T00:00:00Z");
        let end = utc("2020-12-31T23:59:59Z");

        let modes = vec![
            TemporalMode::from_to(start, end),
            TemporalMode::between(start, end),
            TemporalMode::contained_in(start, end),
        ];

        for mode in modes {
            match TemporalClauseBuilder::default().build(&table, &mode) {
                Err(TemporalQueryError::InvalidRange { start: s, end: e, .. }) => {
                    assert_eq!((s, e), (start, end));
                }
                other => panic!("{} should fail with InvalidRange, got {:?}", mode.name(), other),
            }
        }
    }

    #[test]
    fn test_timestamps_never_in_template() {
        let table = resolver().resolve(&EntityDescriptor::from("Employee")).unwrap();
        let plus_three = FixedOffset::east_opt(3 * 3600).unwrap();
        let start = plus_three.with_ymd_and_hms(2019, 7, 4, 13, 45, 0).unwrap();
        let end = utc("2022-11-30T08:15:00Z");

        let modes = vec![
            TemporalMode::as_of(start),
            TemporalMode::from_to(start, end),
            TemporalMode::between(start, end),
            TemporalMode::contained_in(start, end),
        ];

        for style in [
            PlaceholderStyle::QuestionMark,
            PlaceholderStyle::AtName,
            PlaceholderStyle::Dollar,
        ] {
            for mode in &modes {
                let statement = TemporalClauseBuilder::new(style).build(&table, mode).unwrap();
                for needle in ["2019", "2022", "13:45", "10:45", "08:15"] {
                    assert!(
                        !statement.sql().contains(needle),
                        "{} leaked into {}",
                        needle,
                        statement.sql()
                    );
                }
            }
        }
    }

    #[test]
    fn test_named_placeholders_are_numbered_in_binding_order() {
        let table = resolver().resolve(&EntityDescriptor::from("Employee")).unwrap();
        let mode = TemporalMode::from_to(utc("2020-01-01T00:00:00Z"), utc("2021-01-01T00:00:00Z"));

        let statement = TemporalClauseBuilder::new(PlaceholderStyle::AtName)
            .build(&table, &mode)
            .unwrap();
        assert!(statement.sql().ends_with("FROM @p0 TO @p1"));

        let statement = TemporalClauseBuilder::new(PlaceholderStyle::Dollar)
            .build(&table, &mode)
            .unwrap();
        assert!(statement.sql().ends_with("FROM $1 TO $2"));
    }

    #[test]
    fn test_hostile_table_name_stays_quoted() {
        let catalog = EntityCatalog::new().with_entity(
            "Employee",
            TableMapping::new("dbo", "Employee] FOR SYSTEM_TIME ALL; DROP TABLE [Employee"),
        );
        let table = TableNameResolver::new(catalog)
            .resolve(&EntityDescriptor::from("Employee"))
            .unwrap();

        assert_eq!(
            table.as_str(),
            "[dbo].[Employee]] FOR SYSTEM_TIME ALL; DROP TABLE [Employee]"
        );

        let statement = TemporalClauseBuilder::default()
            .build(&table, &TemporalMode::All)
            .unwrap();
        assert_eq!(
            statement.sql(),
            "SELECT * FROM [dbo].[Employee]] FOR SYSTEM_TIME ALL; DROP TABLE [Employee] \
             FOR SYSTEM_TIME ALL"
        );
    }

    #[test]
    fn test_backtick_quoting_for_other_stores() {
        let table = temporal_sql::QualifiedName::new("app", "orders", IdentifierQuoting::Backtick);
        let statement = TemporalClauseBuilder::default()
            .build(&table, &TemporalMode::All)
            .unwrap();
        assert_eq!(statement.sql(), "SELECT * FROM `app`.`orders` FOR SYSTEM_TIME ALL");
    }
}
