//! Columnas filtrables por entidad

use super::{EntityKind, ValueKind};
use std::fmt;

/// Declara el enum de columnas de una entidad con su nombre SQL y tipo
macro_rules! entity_columns {
    (
        $(#[$meta:meta])*
        $name:ident => $entity:ident {
            $($variant:ident => ($column:literal, $kind:ident)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $column),+
                }
            }

            pub const fn kind(self) -> ValueKind {
                match self {
                    $($name::$variant => ValueKind::$kind),+
                }
            }
        }

        impl From<$name> for Column {
            fn from(column: $name) -> Self {
                Column::$entity(column)
            }
        }
    };
}

entity_columns! {
    /// Columnas de `vehicles`
    VehicleColumn => Vehicle {
        Id => ("id", BigInt),
        Plate => ("plate", Text),
        Renavam => ("renavam", Text),
        Chassis => ("chassis", Text),
        Manufacturer => ("manufacturer", Text),
        Model => ("model", Text),
        Engine => ("engine", Text),
        Year => ("year", Integer),
        Fuel => ("fuel", Text),
        BleTagId => ("ble_tag_id", Text),
        Status => ("operational_status", Text),
    }
}

entity_columns! {
    /// Columnas de `clients`
    ClientColumn => Client {
        Id => ("id", BigInt),
        RegisteredOn => ("registered_on", Date),
        Sex => ("sex", Text),
        Name => ("name", Text),
        Surname => ("surname", Text),
        BirthDate => ("birth_date", Date),
        Cpf => ("cpf", Text),
        Profession => ("profession", Text),
        MaritalStatus => ("marital_status", Text),
        AddressId => ("address_id", BigInt),
        ContactId => ("contact_id", BigInt),
    }
}

entity_columns! {
    /// Columnas de `addresses`
    AddressColumn => Address {
        Id => ("id", BigInt),
        PostalCode => ("postal_code", Text),
        Number => ("number", Integer),
        Street => ("street", Text),
        Neighborhood => ("neighborhood", Text),
        City => ("city", Text),
        State => ("state", Text),
        Country => ("country", Text),
        Complement => ("complement", Text),
        Note => ("note", Text),
    }
}

entity_columns! {
    /// Columnas de `contacts`
    ContactColumn => Contact {
        Id => ("id", BigInt),
        Email => ("email", Text),
        AreaCode => ("area_code", Integer),
        CountryCode => ("country_code", Integer),
        Phone1 => ("phone1", Text),
        Phone2 => ("phone2", Text),
        Phone3 => ("phone3", Text),
        Mobile => ("mobile", Text),
        Other => ("other", Text),
        Note => ("note", Text),
    }
}

entity_columns! {
    /// Columnas de `yards`
    YardColumn => Yard {
        Id => ("id", BigInt),
        Name => ("name", Text),
        EntryDate => ("entry_date", Date),
        ExitDate => ("exit_date", Date),
        Note => ("note", Text),
    }
}

entity_columns! {
    /// Columnas de `zones`
    ZoneColumn => Zone {
        Id => ("id", BigInt),
        Name => ("name", Text),
        EntryDate => ("entry_date", Date),
        ExitDate => ("exit_date", Date),
        Note => ("note", Text),
    }
}

entity_columns! {
    /// Columnas de `parking_boxes`
    BoxColumn => ParkingBox {
        Id => ("id", BigInt),
        Name => ("name", Text),
        Status => ("status", Text),
        EntryDate => ("entry_date", Date),
        ExitDate => ("exit_date", Date),
        Note => ("note", Text),
    }
}

entity_columns! {
    /// Columnas de `tracking_records`
    TrackingColumn => Tracking {
        Id => ("id", BigInt),
        IpsX => ("ips_x", Decimal),
        IpsY => ("ips_y", Decimal),
        IpsZ => ("ips_z", Decimal),
        GpsLatitude => ("gps_latitude", Decimal),
        GpsLongitude => ("gps_longitude", Decimal),
        GpsAltitude => ("gps_altitude", Decimal),
        RecordedAt => ("recorded_at", Timestamp),
    }
}

/// Columna de cualquier entidad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Vehicle(VehicleColumn),
    Client(ClientColumn),
    Address(AddressColumn),
    Contact(ContactColumn),
    Yard(YardColumn),
    Zone(ZoneColumn),
    ParkingBox(BoxColumn),
    Tracking(TrackingColumn),
}

impl Column {
    /// Entidad a la que pertenece la columna
    pub const fn entity(self) -> EntityKind {
        match self {
            Column::Vehicle(_) => EntityKind::Vehicle,
            Column::Client(_) => EntityKind::Client,
            Column::Address(_) => EntityKind::Address,
            Column::Contact(_) => EntityKind::Contact,
            Column::Yard(_) => EntityKind::Yard,
            Column::Zone(_) => EntityKind::Zone,
            Column::ParkingBox(_) => EntityKind::ParkingBox,
            Column::Tracking(_) => EntityKind::Tracking,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Column::Vehicle(c) => c.name(),
            Column::Client(c) => c.name(),
            Column::Address(c) => c.name(),
            Column::Contact(c) => c.name(),
            Column::Yard(c) => c.name(),
            Column::Zone(c) => c.name(),
            Column::ParkingBox(c) => c.name(),
            Column::Tracking(c) => c.name(),
        }
    }

    pub const fn kind(self) -> ValueKind {
        match self {
            Column::Vehicle(c) => c.kind(),
            Column::Client(c) => c.kind(),
            Column::Address(c) => c.kind(),
            Column::Contact(c) => c.kind(),
            Column::Yard(c) => c.kind(),
            Column::Zone(c) => c.kind(),
            Column::ParkingBox(c) => c.kind(),
            Column::Tracking(c) => c.kind(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.entity().table(), self.name())
    }
}
