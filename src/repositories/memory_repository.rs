//! Almacén en memoria
//!
//! Mantiene las filas de cada entidad y las tablas de unión, y evalúa los
//! predicados con `Predicate::matches`. Se usa en pruebas y en modo demo.

use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::SearchStore;
use crate::dto::{Pagination, SortOrder};
use crate::models::{
    Address, Client, Contact, Entity, ParkingBox, TrackingRecord, Vehicle, Yard, Zone,
};
use crate::predicate::{FilterError, Predicate, Record, RelationSource, Value};
use crate::schema::{EntityKind, JoinPath, Relation};
use crate::utils::errors::AppResult;

/// Fila de una tabla de unión
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct JunctionRow {
    left: (&'static str, i64),
    right: (&'static str, i64),
}

impl JunctionRow {
    fn get(&self, key: &str) -> Option<i64> {
        if self.left.0 == key {
            Some(self.left.1)
        } else if self.right.0 == key {
            Some(self.right.1)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryFleet {
    pub vehicles: Vec<Vehicle>,
    pub clients: Vec<Client>,
    pub addresses: Vec<Address>,
    pub contacts: Vec<Contact>,
    pub yards: Vec<Yard>,
    pub zones: Vec<Zone>,
    pub boxes: Vec<ParkingBox>,
    pub tracking: Vec<TrackingRecord>,
    junctions: HashMap<&'static str, Vec<JunctionRow>>,
}

impl InMemoryFleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registrar un vínculo N:M entre `source_id` y `target_id`
    pub fn link(&mut self, relation: Relation, source_id: i64, target_id: i64) -> Result<(), FilterError> {
        let JoinPath::Junction {
            table,
            source_key,
            target_key,
        } = relation.path()
        else {
            return Err(FilterError::schema_mismatch(
                relation.source(),
                format!("`{relation}` is not a many-to-many relation"),
            ));
        };

        let row = JunctionRow {
            left: (source_key, source_id),
            right: (target_key, target_id),
        };
        let rows = self.junctions.entry(table).or_default();
        if !rows.contains(&row) {
            rows.push(row);
        }
        Ok(())
    }

    fn records(&self, entity: EntityKind) -> Vec<&dyn Record> {
        fn erase<R: Record>(rows: &[R]) -> Vec<&dyn Record> {
            rows.iter().map(|row| row as &dyn Record).collect()
        }

        match entity {
            EntityKind::Vehicle => erase(&self.vehicles),
            EntityKind::Client => erase(&self.clients),
            EntityKind::Address => erase(&self.addresses),
            EntityKind::Contact => erase(&self.contacts),
            EntityKind::Yard => erase(&self.yards),
            EntityKind::Zone => erase(&self.zones),
            EntityKind::ParkingBox => erase(&self.boxes),
            EntityKind::Tracking => erase(&self.tracking),
        }
    }

    fn matching<E: Entity>(&self, predicate: &Predicate) -> Vec<&E> {
        E::rows_in(self)
            .iter()
            .filter(|row| predicate.matches(*row, self))
            .collect()
    }
}

impl RelationSource for InMemoryFleet {
    fn related<'a>(&'a self, relation: Relation, record: &dyn Record) -> Vec<&'a dyn Record> {
        let targets = self.records(relation.target());

        match relation.path() {
            JoinPath::Junction {
                table,
                source_key,
                target_key,
            } => {
                let ids: Vec<i64> = self
                    .junctions
                    .get(table)
                    .map(|rows| {
                        rows.iter()
                            .filter(|row| row.get(source_key) == Some(record.id()))
                            .filter_map(|row| row.get(target_key))
                            .collect()
                    })
                    .unwrap_or_default();
                targets
                    .into_iter()
                    .filter(|target| ids.contains(&target.id()))
                    .collect()
            }
            JoinPath::ForeignKey { column } => match record.value(column) {
                Some(Value::BigInt(fk)) => targets
                    .into_iter()
                    .filter(|target| target.id() == fk)
                    .collect(),
                _ => Vec::new(),
            },
            JoinPath::ReverseForeignKey { column } => {
                let id = Value::BigInt(record.id());
                targets
                    .into_iter()
                    .filter(|target| target.value(column).as_ref() == Some(&id))
                    .collect()
            }
        }
    }
}

#[async_trait]
impl SearchStore for InMemoryFleet {
    async fn search<E: Entity>(&self, predicate: &Predicate, pagination: &Pagination) -> AppResult<Vec<E>> {
        let mut rows = self.matching::<E>(predicate);

        if let Some(sort) = pagination.sort {
            // NULL al final en ASC y al principio en DESC, como PostgreSQL
            rows.sort_by(|a, b| {
                let ordering = match (a.value(sort.column), b.value(sort.column)) {
                    (Some(a), Some(b)) => a.compare(&b).unwrap_or(Ordering::Equal),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                };
                match sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let offset = usize::try_from(pagination.offset()).unwrap_or(usize::MAX);
        Ok(rows
            .into_iter()
            .skip(offset)
            .take(pagination.size as usize)
            .cloned()
            .collect())
    }

    async fn count<E: Entity>(&self, predicate: &Predicate) -> AppResult<i64> {
        Ok(self.matching::<E>(predicate).len() as i64)
    }

    async fn find_by_id<E: Entity>(&self, id: i64) -> AppResult<Option<E>> {
        Ok(E::rows_in(self).iter().find(|row| row.id() == id).cloned())
    }
}
