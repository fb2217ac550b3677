use shopseed_core::EntityKind;

/// Schema the tables are landed in.
pub const STAGING_SCHEMA: &str = "staging";

/// Destination table for one entity, with SQL types in column order.
#[derive(Debug, Clone, Copy)]
pub struct StagingTable {
    pub kind: EntityKind,
    pub column_types: &'static [&'static str],
}

/// Staging tables in load order.
pub const STAGING_TABLES: [StagingTable; 4] = [
    StagingTable {
        kind: EntityKind::Customer,
        column_types: &[
            "VARCHAR(20) PRIMARY KEY",
            "VARCHAR(100)",
            "VARCHAR(100)",
            "VARCHAR(255)",
            "VARCHAR(20)",
            "DATE",
            "VARCHAR(100)",
            "VARCHAR(100)",
            "VARCHAR(100)",
            "VARCHAR(10)",
        ],
    },
    StagingTable {
        kind: EntityKind::Product,
        column_types: &[
            "VARCHAR(20) PRIMARY KEY",
            "VARCHAR(255)",
            "VARCHAR(100)",
            "VARCHAR(100)",
            "NUMERIC(12, 2)",
            "NUMERIC(12, 2)",
            "VARCHAR(255)",
            "INTEGER",
            "VARCHAR(20)",
        ],
    },
    StagingTable {
        kind: EntityKind::Transaction,
        column_types: &[
            "VARCHAR(20) PRIMARY KEY",
            "VARCHAR(20)",
            "DATE",
            "TIME",
            "VARCHAR(50)",
            "TEXT",
            "NUMERIC(14, 2)",
        ],
    },
    StagingTable {
        kind: EntityKind::TransactionItem,
        column_types: &[
            "VARCHAR(20) PRIMARY KEY",
            "VARCHAR(20)",
            "VARCHAR(20)",
            "INTEGER",
            "NUMERIC(12, 2)",
            "INTEGER",
            "NUMERIC(14, 2)",
        ],
    },
];

impl StagingTable {
    pub fn qualified_name(&self) -> String {
        format!("{STAGING_SCHEMA}.{}", self.kind.table_name())
    }

    pub fn create_schema_sql() -> String {
        format!("CREATE SCHEMA IF NOT EXISTS {STAGING_SCHEMA}")
    }

    pub fn create_table_sql(&self) -> String {
        let columns = self
            .kind
            .columns()
            .iter()
            .zip(self.column_types)
            .map(|(name, sql_type)| format!("{name} {sql_type}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("CREATE TABLE IF NOT EXISTS {} ({columns})", self.qualified_name())
    }

    pub fn truncate_sql(&self) -> String {
        format!("TRUNCATE TABLE {}", self.qualified_name())
    }

    /// `COPY` with an explicit column list; the loader binds positionally.
    pub fn copy_sql(&self) -> String {
        format!(
            "COPY {} ({}) FROM STDIN WITH (FORMAT csv, HEADER true)",
            self.qualified_name(),
            self.kind.columns().join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_has_a_type() {
        for table in STAGING_TABLES {
            assert_eq!(
                table.kind.columns().len(),
                table.column_types.len(),
                "{}",
                table.kind
            );
        }
    }

    #[test]
    fn tables_follow_load_order() {
        let kinds: Vec<_> = STAGING_TABLES.iter().map(|table| table.kind).collect();
        assert_eq!(kinds, EntityKind::ALL.to_vec());
    }

    #[test]
    fn copy_binds_contract_columns() {
        assert_eq!(
            STAGING_TABLES[3].copy_sql(),
            "COPY staging.transaction_items (item_id, transaction_id, product_id, quantity, \
             unit_price, discount_percentage, line_total) FROM STDIN WITH (FORMAT csv, HEADER true)"
        );
    }

    #[test]
    fn ddl_is_idempotent() {
        let ddl = STAGING_TABLES[0].create_table_sql();
        assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS staging.customers (customer_id VARCHAR(20) PRIMARY KEY, first_name"));
        assert!(ddl.ends_with("age_group VARCHAR(10))"));
        assert_eq!(STAGING_TABLES[1].truncate_sql(), "TRUNCATE TABLE staging.products");
    }
}
