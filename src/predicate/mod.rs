//! Constructor dinámico de predicados
//!
//! Un predicado es un árbol de condiciones sobre una entidad raíz:
//! comparaciones sobre columnas propias y semi-joins (`EXISTS`) hacia
//! entidades relacionadas, combinadas siempre con AND.
//!
//! El mismo árbol se puede renderizar a SQL (`sql`) o evaluar en memoria
//! (`eval`), y ambas formas comparten la misma semántica:
//!
//! - Un AND vacío es el predicado identidad (acepta todas las filas).
//! - Un valor NULL nunca satisface igualdad, contención ni rango.
//! - Una relación sin fila relacionada que cumpla excluye a la raíz.

pub mod error;
pub mod eval;
pub mod sql;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;

use crate::schema::{Column, EntityKind, Relation, ValueKind};

pub use error::FilterError;
pub use eval::{Record, RelationSource};

/// Valor tipado usado en comparaciones
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    BigInt(i64),
    Integer(i32),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Decimal(Decimal),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::BigInt(_) => ValueKind::BigInt,
            Value::Integer(_) => ValueKind::Integer,
            Value::Text(_) => ValueKind::Text,
            Value::Date(_) => ValueKind::Date,
            Value::Timestamp(_) => ValueKind::Timestamp,
            Value::Decimal(_) => ValueKind::Decimal,
        }
    }

    /// Orden entre valores del mismo tipo; `None` si los tipos difieren
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::BigInt(a), Value::BigInt(b)) => Some(a.cmp(b)),
            (Value::Integer(a), Value::Integer(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
            (Value::Decimal(a), Value::Decimal(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::BigInt(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::Timestamp(value)
    }
}

impl From<Decimal> for Value {
    fn from(value: Decimal) -> Self {
        Value::Decimal(value)
    }
}

/// Condición sobre una columna
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Igualdad exacta
    Equals(Value),
    /// Subcadena sin distinguir mayúsculas
    Contains(String),
    /// Rango inclusivo; cada extremo es opcional
    Range {
        lower: Option<Value>,
        upper: Option<Value>,
    },
}

/// Árbol de predicados sobre una entidad
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Predicate {
    Compare {
        #[serde(serialize_with = "serialize_column")]
        column: Column,
        condition: Condition,
    },
    Related {
        #[serde(serialize_with = "serialize_relation")]
        relation: Relation,
        predicate: Box<Predicate>,
    },
    And(Vec<Predicate>),
}

fn serialize_column<S: serde::Serializer>(column: &Column, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(column)
}

fn serialize_relation<S: serde::Serializer>(
    relation: &Relation,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(relation)
}

impl Predicate {
    /// Predicado identidad
    pub fn all() -> Self {
        Predicate::And(Vec::new())
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Predicate::And(clauses) if clauses.iter().all(Predicate::is_identity))
    }

    /// Número de condiciones hoja, incluyendo las de entidades relacionadas
    pub fn condition_count(&self) -> usize {
        match self {
            Predicate::Compare { .. } => 1,
            Predicate::Related { predicate, .. } => predicate.condition_count(),
            Predicate::And(clauses) => clauses.iter().map(Predicate::condition_count).sum(),
        }
    }

    /// Verificar que el árbol es coherente con el esquema de `root`
    pub fn check(&self, root: EntityKind) -> Result<(), FilterError> {
        match self {
            Predicate::Compare { column, condition } => {
                if column.entity() != root {
                    return Err(FilterError::schema_mismatch(
                        root,
                        format!("column `{column}` does not belong to `{root}`"),
                    ));
                }
                check_condition(root, *column, condition)
            }
            Predicate::Related { relation, predicate } => {
                if relation.source() != root {
                    return Err(FilterError::schema_mismatch(
                        root,
                        format!("relation `{relation}` does not start at `{root}`"),
                    ));
                }
                predicate.check(relation.target())
            }
            Predicate::And(clauses) => clauses.iter().try_for_each(|clause| clause.check(root)),
        }
    }
}

fn check_condition(root: EntityKind, column: Column, condition: &Condition) -> Result<(), FilterError> {
    let expected = column.kind();
    let mismatch = |found: ValueKind| {
        FilterError::schema_mismatch(
            root,
            format!("column `{column}` is {expected}, filter value is {found}"),
        )
    };

    match condition {
        Condition::Equals(value) if value.kind() != expected => Err(mismatch(value.kind())),
        Condition::Contains(_) if expected != ValueKind::Text => Err(mismatch(ValueKind::Text)),
        Condition::Range { lower, upper } => {
            for bound in [lower, upper].into_iter().flatten() {
                if bound.kind() != expected {
                    return Err(mismatch(bound.kind()));
                }
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Acumula condiciones de una entidad; los valores ausentes no aportan nada
#[derive(Debug, Clone)]
pub struct PredicateBuilder {
    root: EntityKind,
    clauses: Vec<Predicate>,
}

impl PredicateBuilder {
    pub fn new(root: EntityKind) -> Self {
        Self {
            root,
            clauses: Vec::new(),
        }
    }

    /// Igualdad exacta si el valor está presente
    pub fn equals<V: Into<Value>>(mut self, column: impl Into<Column>, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.clauses.push(Predicate::Compare {
                column: column.into(),
                condition: Condition::Equals(value.into()),
            });
        }
        self
    }

    /// Subcadena sin distinguir mayúsculas si el valor está presente
    pub fn contains(mut self, column: impl Into<Column>, value: Option<&str>) -> Self {
        if let Some(needle) = value {
            self.clauses.push(Predicate::Compare {
                column: column.into(),
                condition: Condition::Contains(needle.to_string()),
            });
        }
        self
    }

    /// Rango inclusivo; sin extremos no añade nada
    pub fn range<V: Into<Value>>(
        mut self,
        column: impl Into<Column>,
        lower: Option<V>,
        upper: Option<V>,
    ) -> Self {
        if lower.is_some() || upper.is_some() {
            self.clauses.push(Predicate::Compare {
                column: column.into(),
                condition: Condition::Range {
                    lower: lower.map(Into::into),
                    upper: upper.map(Into::into),
                },
            });
        }
        self
    }

    /// Condiciones sobre la entidad destino de `relation` (semi-join)
    pub fn related<F>(mut self, relation: Relation, build: F) -> Self
    where
        F: FnOnce(PredicateBuilder) -> PredicateBuilder,
    {
        let inner = build(PredicateBuilder::new(relation.target())).finish();
        if !inner.is_identity() {
            self.clauses.push(Predicate::Related {
                relation,
                predicate: Box::new(inner),
            });
        }
        self
    }

    /// Cerrar sin validar contra el esquema
    pub fn finish(self) -> Predicate {
        Predicate::And(self.clauses)
    }

    /// Cerrar validando contra el esquema de la raíz
    pub fn build(self) -> Result<Predicate, FilterError> {
        let root = self.root;
        let predicate = self.finish();
        predicate.check(root)?;
        Ok(predicate)
    }
}
