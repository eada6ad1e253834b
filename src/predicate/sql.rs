//! Renderizado de predicados a SQL de PostgreSQL
//!
//! Todos los valores van como parámetros (`$n`), nunca interpolados.
//! Las relaciones se expresan como `EXISTS (SELECT 1 ...)`: una fila raíz
//! aparece una sola vez aunque tenga varias filas relacionadas que cumplan.

use sqlx::{Postgres, QueryBuilder};

use super::{Condition, Predicate, Value};
use crate::schema::{EntityKind, JoinPath, ID_COLUMN};

/// Alias de la tabla raíz en las consultas generadas
pub const ROOT_ALIAS: &str = "t0";

impl Predicate {
    /// Añadir el predicado (evaluado sobre `ROOT_ALIAS`) al builder
    pub fn push_sql(&self, builder: &mut QueryBuilder<'_, Postgres>, root: EntityKind) {
        let mut renderer = SqlRenderer { next_alias: 1 };
        renderer.push(builder, self, root, ROOT_ALIAS);
    }
}

struct SqlRenderer {
    next_alias: usize,
}

impl SqlRenderer {
    fn fresh(&mut self) -> usize {
        let alias = self.next_alias;
        self.next_alias += 1;
        alias
    }

    fn push(
        &mut self,
        builder: &mut QueryBuilder<'_, Postgres>,
        predicate: &Predicate,
        entity: EntityKind,
        alias: &str,
    ) {
        match predicate {
            Predicate::And(clauses) if clauses.is_empty() => {
                builder.push("TRUE");
            }
            Predicate::And(clauses) if clauses.len() == 1 => {
                self.push(builder, &clauses[0], entity, alias);
            }
            Predicate::And(clauses) => {
                builder.push("(");
                for (i, clause) in clauses.iter().enumerate() {
                    if i > 0 {
                        builder.push(" AND ");
                    }
                    self.push(builder, clause, entity, alias);
                }
                builder.push(")");
            }
            Predicate::Compare { column, condition } => {
                push_condition(builder, alias, column.name(), condition);
            }
            Predicate::Related { relation, predicate } => {
                let target = relation.target();
                let n = self.fresh();
                let target_alias = format!("t{n}");

                builder.push("EXISTS (SELECT 1 FROM ");
                match relation.path() {
                    JoinPath::Junction {
                        table,
                        source_key,
                        target_key,
                    } => {
                        builder.push(format!(
                            "{table} j{n} JOIN {target_table} {target_alias} ON {target_alias}.{ID_COLUMN} = j{n}.{target_key} WHERE j{n}.{source_key} = {alias}.{ID_COLUMN}",
                            target_table = target.table(),
                        ));
                    }
                    JoinPath::ForeignKey { column } => {
                        builder.push(format!(
                            "{target_table} {target_alias} WHERE {target_alias}.{ID_COLUMN} = {alias}.{fk}",
                            target_table = target.table(),
                            fk = column.name(),
                        ));
                    }
                    JoinPath::ReverseForeignKey { column } => {
                        builder.push(format!(
                            "{target_table} {target_alias} WHERE {target_alias}.{fk} = {alias}.{ID_COLUMN}",
                            target_table = target.table(),
                            fk = column.name(),
                        ));
                    }
                }
                builder.push(" AND ");
                self.push(builder, predicate, target, &target_alias);
                builder.push(")");
            }
        }
    }
}

fn push_condition(
    builder: &mut QueryBuilder<'_, Postgres>,
    alias: &str,
    column: &str,
    condition: &Condition,
) {
    match condition {
        Condition::Equals(value) => {
            builder.push(format!("{alias}.{column} = "));
            push_value(builder, value);
        }
        Condition::Contains(needle) => {
            builder.push(format!("LOWER({alias}.{column}) LIKE "));
            builder.push_bind(like_pattern(needle));
            builder.push(" ESCAPE '\\'");
        }
        Condition::Range { lower, upper } => match (lower, upper) {
            (Some(lower), Some(upper)) => {
                builder.push(format!("({alias}.{column} >= "));
                push_value(builder, lower);
                builder.push(format!(" AND {alias}.{column} <= "));
                push_value(builder, upper);
                builder.push(")");
            }
            (Some(lower), None) => {
                builder.push(format!("{alias}.{column} >= "));
                push_value(builder, lower);
            }
            (None, Some(upper)) => {
                builder.push(format!("{alias}.{column} <= "));
                push_value(builder, upper);
            }
            (None, None) => {
                builder.push("TRUE");
            }
        },
    }
}

fn push_value(builder: &mut QueryBuilder<'_, Postgres>, value: &Value) {
    match value.clone() {
        Value::BigInt(v) => builder.push_bind(v),
        Value::Integer(v) => builder.push_bind(v),
        Value::Text(v) => builder.push_bind(v),
        Value::Date(v) => builder.push_bind(v),
        Value::Timestamp(v) => builder.push_bind(v),
        Value::Decimal(v) => builder.push_bind(v),
    };
}

/// Patrón `LIKE` en minúsculas con `%`, `_` y `\` escapados
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateBuilder;
    use crate::schema::{
        AddressColumn, ClientColumn, EntityKind, Relation, VehicleColumn, ZoneColumn,
    };

    fn render(predicate: &Predicate, root: EntityKind) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("");
        predicate.push_sql(&mut builder, root);
        builder.sql().to_string()
    }

    #[test]
    fn identity_renders_true() {
        assert_eq!(render(&Predicate::all(), EntityKind::Vehicle), "TRUE");
    }

    #[test]
    fn own_columns_use_bound_parameters() {
        let predicate = PredicateBuilder::new(EntityKind::Vehicle)
            .equals(VehicleColumn::Plate, Some("ABC1D23"))
            .contains(VehicleColumn::Model, Some("Civ"))
            .range(VehicleColumn::Year, Some(2018), Some(2022))
            .finish();

        assert_eq!(
            render(&predicate, EntityKind::Vehicle),
            "(t0.plate = $1 AND LOWER(t0.model) LIKE $2 ESCAPE '\\' AND (t0.year >= $3 AND t0.year <= $4))"
        );
    }

    #[test]
    fn junction_relation_renders_exists() {
        let predicate = PredicateBuilder::new(EntityKind::Vehicle)
            .related(Relation::VehicleZones, |b| b.contains(ZoneColumn::Name, Some("A")))
            .finish();

        assert_eq!(
            render(&predicate, EntityKind::Vehicle),
            "EXISTS (SELECT 1 FROM vehicle_zones j1 JOIN zones t1 ON t1.id = j1.zone_id \
             WHERE j1.vehicle_id = t0.id AND LOWER(t1.name) LIKE $1 ESCAPE '\\')"
        );
    }

    #[test]
    fn foreign_key_relations_render_in_both_directions() {
        let forward = PredicateBuilder::new(EntityKind::Client)
            .related(Relation::ClientAddress, |b| b.equals(AddressColumn::State, Some("SP")))
            .finish();
        assert_eq!(
            render(&forward, EntityKind::Client),
            "EXISTS (SELECT 1 FROM addresses t1 WHERE t1.id = t0.address_id AND t1.state = $1)"
        );

        let reverse = PredicateBuilder::new(EntityKind::Address)
            .related(Relation::AddressClients, |b| b.contains(ClientColumn::Name, Some("ana")))
            .finish();
        assert_eq!(
            render(&reverse, EntityKind::Address),
            "EXISTS (SELECT 1 FROM clients t1 WHERE t1.address_id = t0.id AND LOWER(t1.name) LIKE $1 ESCAPE '\\')"
        );
    }

    #[test]
    fn each_relation_gets_its_own_alias() {
        let predicate = PredicateBuilder::new(EntityKind::Vehicle)
            .related(Relation::VehicleClients, |b| b.equals(ClientColumn::Cpf, Some("1")))
            .related(Relation::VehicleClients, |b| b.contains(ClientColumn::Name, Some("a")))
            .finish();

        let sql = render(&predicate, EntityKind::Vehicle);
        assert!(sql.contains("client_vehicles j1 JOIN clients t1"));
        assert!(sql.contains("client_vehicles j2 JOIN clients t2"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("Civ"), "%civ%");
        assert_eq!(like_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
        assert_eq!(like_pattern(""), "%%");
    }
}
