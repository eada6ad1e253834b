//! Relaciones navegables entre entidades

use super::{ClientColumn, Column, EntityKind};
use std::fmt;

/// Cómo se llega de la entidad origen a la entidad destino
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinPath {
    /// Tabla de unión N:M; `source_key` apunta al origen y `target_key` al destino
    Junction {
        table: &'static str,
        source_key: &'static str,
        target_key: &'static str,
    },
    /// El origen guarda la FK hacia el `id` del destino
    ForeignKey { column: Column },
    /// El destino guarda la FK hacia el `id` del origen
    ReverseForeignKey { column: Column },
}

/// Relaciones declaradas. El nombre se lee "Origen -> Destino".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    VehicleClients,
    VehicleBoxes,
    VehicleYards,
    VehicleZones,
    VehicleTracking,
    ClientAddress,
    ClientContact,
    ClientVehicles,
    AddressClients,
    AddressYards,
    ContactClients,
    ContactYards,
    YardVehicles,
    YardAddresses,
    YardContacts,
    YardZones,
    YardBoxes,
    ZoneBoxes,
    ZoneVehicles,
    ZoneYards,
    BoxVehicles,
    BoxZones,
    BoxYards,
    TrackingVehicles,
}

const fn junction(table: &'static str, source_key: &'static str, target_key: &'static str) -> JoinPath {
    JoinPath::Junction {
        table,
        source_key,
        target_key,
    }
}

impl Relation {
    pub const fn source(self) -> EntityKind {
        use Relation::*;
        match self {
            VehicleClients | VehicleBoxes | VehicleYards | VehicleZones | VehicleTracking => {
                EntityKind::Vehicle
            }
            ClientAddress | ClientContact | ClientVehicles => EntityKind::Client,
            AddressClients | AddressYards => EntityKind::Address,
            ContactClients | ContactYards => EntityKind::Contact,
            YardVehicles | YardAddresses | YardContacts | YardZones | YardBoxes => EntityKind::Yard,
            ZoneBoxes | ZoneVehicles | ZoneYards => EntityKind::Zone,
            BoxVehicles | BoxZones | BoxYards => EntityKind::ParkingBox,
            TrackingVehicles => EntityKind::Tracking,
        }
    }

    pub const fn target(self) -> EntityKind {
        use Relation::*;
        match self {
            VehicleClients | AddressClients | ContactClients => EntityKind::Client,
            VehicleBoxes | YardBoxes | ZoneBoxes => EntityKind::ParkingBox,
            VehicleYards | AddressYards | ContactYards | ZoneYards | BoxYards => EntityKind::Yard,
            VehicleZones | YardZones | BoxZones => EntityKind::Zone,
            VehicleTracking => EntityKind::Tracking,
            ClientAddress | YardAddresses => EntityKind::Address,
            ClientContact | YardContacts => EntityKind::Contact,
            ClientVehicles | YardVehicles | ZoneVehicles | BoxVehicles | TrackingVehicles => {
                EntityKind::Vehicle
            }
        }
    }

    pub const fn path(self) -> JoinPath {
        use Relation::*;
        match self {
            VehicleClients => junction("client_vehicles", "vehicle_id", "client_id"),
            ClientVehicles => junction("client_vehicles", "client_id", "vehicle_id"),
            VehicleBoxes => junction("vehicle_boxes", "vehicle_id", "box_id"),
            BoxVehicles => junction("vehicle_boxes", "box_id", "vehicle_id"),
            VehicleYards => junction("vehicle_yards", "vehicle_id", "yard_id"),
            YardVehicles => junction("vehicle_yards", "yard_id", "vehicle_id"),
            VehicleZones => junction("vehicle_zones", "vehicle_id", "zone_id"),
            ZoneVehicles => junction("vehicle_zones", "zone_id", "vehicle_id"),
            VehicleTracking => junction("vehicle_tracking", "vehicle_id", "tracking_id"),
            TrackingVehicles => junction("vehicle_tracking", "tracking_id", "vehicle_id"),
            AddressYards => junction("yard_addresses", "address_id", "yard_id"),
            YardAddresses => junction("yard_addresses", "yard_id", "address_id"),
            ContactYards => junction("yard_contacts", "contact_id", "yard_id"),
            YardContacts => junction("yard_contacts", "yard_id", "contact_id"),
            YardZones => junction("zone_yards", "yard_id", "zone_id"),
            ZoneYards => junction("zone_yards", "zone_id", "yard_id"),
            YardBoxes => junction("yard_boxes", "yard_id", "box_id"),
            BoxYards => junction("yard_boxes", "box_id", "yard_id"),
            ZoneBoxes => junction("zone_boxes", "zone_id", "box_id"),
            BoxZones => junction("zone_boxes", "box_id", "zone_id"),
            ClientAddress => JoinPath::ForeignKey {
                column: Column::Client(ClientColumn::AddressId),
            },
            ClientContact => JoinPath::ForeignKey {
                column: Column::Client(ClientColumn::ContactId),
            },
            AddressClients => JoinPath::ReverseForeignKey {
                column: Column::Client(ClientColumn::AddressId),
            },
            ContactClients => JoinPath::ReverseForeignKey {
                column: Column::Client(ClientColumn::ContactId),
            },
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source(), self.target())
    }
}
