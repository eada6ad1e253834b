//! Evaluación de predicados sobre filas en memoria

use super::{Condition, Predicate, Value};
use crate::schema::{Column, EntityKind, Relation};
use std::cmp::Ordering;

/// Fila de una entidad vista por el evaluador
pub trait Record: Send + Sync {
    fn entity(&self) -> EntityKind;

    fn id(&self) -> i64;

    /// Valor de la columna; `None` para NULL o para columnas de otra entidad
    fn value(&self, column: Column) -> Option<Value>;
}

/// Resuelve las filas relacionadas a través de una relación declarada
pub trait RelationSource {
    fn related<'a>(&'a self, relation: Relation, record: &dyn Record) -> Vec<&'a dyn Record>;
}

impl Predicate {
    /// ¿La fila cumple el predicado?
    pub fn matches(&self, record: &dyn Record, source: &dyn RelationSource) -> bool {
        match self {
            Predicate::Compare { column, condition } => {
                condition.test(record.value(*column).as_ref())
            }
            Predicate::Related { relation, predicate } => source
                .related(*relation, record)
                .into_iter()
                .any(|related| predicate.matches(related, source)),
            Predicate::And(clauses) => clauses.iter().all(|clause| clause.matches(record, source)),
        }
    }
}

impl Condition {
    pub fn test(&self, value: Option<&Value>) -> bool {
        let Some(value) = value else {
            return false;
        };

        match self {
            Condition::Equals(expected) => value == expected,
            Condition::Contains(needle) => value
                .as_text()
                .map(|haystack| haystack.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
            Condition::Range { lower, upper } => {
                let above = lower.as_ref().map_or(true, |lower| {
                    matches!(value.compare(lower), Some(Ordering::Greater | Ordering::Equal))
                });
                let below = upper.as_ref().map_or(true, |upper| {
                    matches!(value.compare(upper), Some(Ordering::Less | Ordering::Equal))
                });
                above && below
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> Value {
        Value::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn null_never_matches() {
        assert!(!Condition::Equals(Value::Integer(1)).test(None));
        assert!(!Condition::Contains(String::new()).test(None));
        assert!(!Condition::Range { lower: None, upper: None }.test(None));
    }

    #[test]
    fn contains_ignores_case_on_both_sides() {
        let condition = Condition::Contains("CiV".into());
        assert!(condition.test(Some(&Value::Text("Civic".into()))));
        assert!(condition.test(Some(&Value::Text("UNCIVILIZED".into()))));
        assert!(!condition.test(Some(&Value::Text("Accord".into()))));
    }

    #[test]
    fn contains_treats_wildcards_literally() {
        let condition = Condition::Contains("50%".into());
        assert!(condition.test(Some(&Value::Text("desconto 50% hoje".into()))));
        assert!(!condition.test(Some(&Value::Text("desconto 500 hoje".into()))));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let range = Condition::Range {
            lower: Some(date(2024, 1, 1)),
            upper: Some(date(2024, 1, 31)),
        };
        assert!(range.test(Some(&date(2024, 1, 1))));
        assert!(range.test(Some(&date(2024, 1, 31))));
        assert!(!range.test(Some(&date(2023, 12, 31))));
        assert!(!range.test(Some(&date(2024, 2, 1))));
    }

    #[test]
    fn open_ended_ranges() {
        let from = Condition::Range { lower: Some(Value::Integer(2020)), upper: None };
        assert!(from.test(Some(&Value::Integer(2025))));
        assert!(!from.test(Some(&Value::Integer(2019))));

        let until = Condition::Range { lower: None, upper: Some(Value::Integer(2020)) };
        assert!(until.test(Some(&Value::Integer(2001))));
        assert!(!until.test(Some(&Value::Integer(2021))));
    }
}
