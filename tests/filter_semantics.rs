use chrono::NaiveDate;
use rust_decimal::Decimal;

use yard_fleet::dto::{PageRequest, PageResponse};
use yard_fleet::filters::{
    AddressFilter, BoxFilter, ClientFilter, ContactFilter, TrackingFilter, VehicleFilter,
    YardFilter, ZoneFilter,
};
use yard_fleet::models::{
    Address, Client, Contact, ParkingBox, TrackingRecord, Vehicle, Yard, Zone,
};
use yard_fleet::repositories::InMemoryFleet;
use yard_fleet::services::SearchService;
use yard_fleet::utils::errors::AppError;
use yard_fleet::{FilterError, Relation};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn vehicle(id: i64, plate: &str, manufacturer: &str, model: &str, year: i32) -> Vehicle {
    Vehicle {
        id,
        plate: plate.to_string(),
        renavam: format!("{:011}", id),
        chassis: format!("9BWZZZ377VT{:06}", id),
        manufacturer: manufacturer.to_string(),
        model: model.to_string(),
        engine: None,
        year,
        fuel: "Flex".to_string(),
        ble_tag_id: None,
        operational_status: None,
    }
}

fn yard(id: i64, name: &str) -> Yard {
    Yard {
        id,
        name: name.to_string(),
        entry_date: date(2024, 1, 10),
        exit_date: date(2024, 12, 20),
        note: None,
    }
}

fn fleet() -> InMemoryFleet {
    let mut fleet = InMemoryFleet::new();

    let mut civic = vehicle(1, "ABC1D23", "Honda", "Civic", 2019);
    civic.engine = Some("2.0 i-VTEC".to_string());
    civic.ble_tag_id = Some("BLE-001".to_string());
    civic.operational_status = Some("ATIVO".to_string());
    fleet.vehicles = vec![
        civic,
        vehicle(2, "DEF4G56", "Toyota", "Corolla", 2021),
        vehicle(3, "GHI7J89", "Uncivilized Motors", "UNCIVILIZED", 2022),
        vehicle(4, "JKL0M12", "Honda", "Accord", 2020),
        vehicle(5, "MNO3P45", "Volkswagen", "Gol 100%_Flex", 2018),
    ];

    fleet.addresses = vec![
        Address {
            id: 30,
            postal_code: "01310-100".to_string(),
            number: 1578,
            street: "Avenida Paulista".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            country: "Brasil".to_string(),
            complement: None,
            note: None,
        },
        Address {
            id: 31,
            postal_code: "13010-000".to_string(),
            number: 45,
            street: "Rua Barão de Jaguara".to_string(),
            neighborhood: "Centro".to_string(),
            city: "Campinas".to_string(),
            state: "SP".to_string(),
            country: "Brasil".to_string(),
            complement: Some("Sala 2".to_string()),
            note: None,
        },
    ];

    fleet.contacts = vec![
        Contact {
            id: 40,
            email: "ana@fleet.com".to_string(),
            area_code: 11,
            country_code: 55,
            phone1: "30303030".to_string(),
            phone2: None,
            phone3: None,
            mobile: "911112222".to_string(),
            other: None,
            note: None,
        },
        Contact {
            id: 41,
            email: "bruno@mail.com".to_string(),
            area_code: 19,
            country_code: 55,
            phone1: "32323232".to_string(),
            phone2: None,
            phone3: None,
            mobile: "988887777".to_string(),
            other: None,
            note: Some("horário comercial".to_string()),
        },
    ];

    fleet.clients = vec![
        Client {
            id: 20,
            registered_on: date(2023, 3, 1),
            sex: "F".to_string(),
            name: "Ana".to_string(),
            surname: "Souza".to_string(),
            birth_date: date(1990, 6, 15),
            cpf: "12345678901".to_string(),
            profession: "Engenheira".to_string(),
            marital_status: "Casada".to_string(),
            address_id: 30,
            contact_id: 40,
        },
        Client {
            id: 21,
            registered_on: date(2024, 2, 1),
            sex: "M".to_string(),
            name: "Bruno".to_string(),
            surname: "Lima".to_string(),
            birth_date: date(1985, 1, 20),
            cpf: "98765432100".to_string(),
            profession: "Motorista".to_string(),
            marital_status: "Solteiro".to_string(),
            address_id: 31,
            contact_id: 41,
        },
    ];

    fleet.yards = vec![yard(10, "Pátio Norte"), yard(11, "Pátio Sul")];
    fleet.zones = vec![Zone {
        id: 50,
        name: "Zona A".to_string(),
        entry_date: date(2024, 1, 10),
        exit_date: date(2024, 12, 20),
        note: None,
    }];
    fleet.boxes = vec![ParkingBox {
        id: 60,
        name: "Box A1".to_string(),
        status: "L".to_string(),
        entry_date: date(2024, 1, 10),
        exit_date: date(2024, 12, 20),
        note: None,
    }];
    fleet.tracking = vec![TrackingRecord {
        id: 70,
        ips_x: Decimal::new(12500, 3),
        ips_y: Decimal::new(3250, 3),
        ips_z: Decimal::ZERO,
        gps_latitude: Decimal::new(-23550520, 6),
        gps_longitude: Decimal::new(-46633308, 6),
        gps_altitude: Decimal::new(76000, 2),
        recorded_at: date(2024, 5, 1).and_hms_opt(10, 30, 0).unwrap(),
    }];

    let links = [
        (Relation::VehicleYards, 1, 10),
        (Relation::VehicleYards, 1, 11),
        (Relation::VehicleYards, 2, 11),
        (Relation::ClientVehicles, 20, 1),
        (Relation::ClientVehicles, 20, 3),
        (Relation::ClientVehicles, 21, 2),
        (Relation::ZoneYards, 50, 10),
        (Relation::VehicleZones, 1, 50),
        (Relation::BoxZones, 60, 50),
        (Relation::VehicleBoxes, 1, 60),
        (Relation::VehicleTracking, 1, 70),
        (Relation::YardAddresses, 10, 30),
    ];
    for (relation, source, target) in links {
        fleet.link(relation, source, target).unwrap();
    }

    fleet
}

fn service() -> SearchService<InMemoryFleet> {
    SearchService::new(fleet())
}

async fn vehicle_ids(filter: VehicleFilter) -> Vec<i64> {
    service()
        .search(&filter, &PageRequest::default())
        .await
        .unwrap()
        .content
        .into_iter()
        .map(|v| v.id)
        .collect()
}

#[tokio::test]
async fn empty_filter_returns_whole_collection() {
    let page = service()
        .search(&VehicleFilter::default(), &PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 1);
    assert_eq!(
        page.content.iter().map(|v| v.id).collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[tokio::test]
async fn exact_match_on_plate() {
    let ids = vehicle_ids(VehicleFilter {
        plate: Some("DEF4G56".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![2]);

    // igualdad exacta: no hay coincidencia parcial
    let ids = vehicle_ids(VehicleFilter {
        plate: Some("DEF4G5".into()),
        ..Default::default()
    })
    .await;
    assert!(ids.is_empty());
}

#[tokio::test]
async fn contains_is_case_insensitive() {
    let ids = vehicle_ids(VehicleFilter {
        model: Some("civ".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn like_wildcards_are_literal() {
    let ids = vehicle_ids(VehicleFilter {
        model: Some("100%_".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![5]);

    let ids = vehicle_ids(VehicleFilter {
        model: Some("_".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![5]);
}

#[tokio::test]
async fn year_ranges_are_inclusive() {
    let from = vehicle_ids(VehicleFilter {
        year_from: Some("2020".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(from, vec![2, 3, 4]);

    let to = vehicle_ids(VehicleFilter {
        year_to: Some("2019".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(to, vec![1, 5]);

    let both = vehicle_ids(VehicleFilter {
        year_from: Some("2019".into()),
        year_to: Some("2021".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(both, vec![1, 2, 4]);
}

#[tokio::test]
async fn fields_are_combined_with_and() {
    let ids = vehicle_ids(VehicleFilter {
        manufacturer: Some("HONDA".into()),
        year_from: Some("2020".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![4]);
}

#[tokio::test]
async fn null_column_never_matches() {
    let ids = vehicle_ids(VehicleFilter {
        engine: Some("v".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![1]);

    let ids = vehicle_ids(VehicleFilter {
        engine: Some("   ".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids.len(), 5);
}

#[tokio::test]
async fn cross_entity_match_appears_once() {
    // el vehículo 1 está en los dos pátios
    let page = service()
        .search(
            &VehicleFilter {
                yard_name: Some("pátio".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total_elements, 2);
    assert_eq!(
        page.content.iter().map(|v| v.id).collect::<Vec<_>>(),
        vec![1, 2]
    );
}

#[tokio::test]
async fn cross_entity_excludes_unlinked_rows() {
    let ids = vehicle_ids(VehicleFilter {
        client_cpf: Some("12345678901".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![1, 3]);

    let ids = vehicle_ids(VehicleFilter {
        zone_name: Some("zona".into()),
        box_name: Some("a1".into()),
        ..Default::default()
    })
    .await;
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn client_reaches_address_and_contact_by_key() {
    let service = service();

    let page = service
        .search(
            &ClientFilter {
                address_city: Some("campinas".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.content.iter().map(|c| c.id).collect::<Vec<_>>(), vec![21]);

    let page = service
        .search(
            &ClientFilter {
                contact_email: Some("FLEET".into()),
                vehicle_model: Some("civic".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.content.iter().map(|c| c.id).collect::<Vec<_>>(), vec![20]);
}

#[tokio::test]
async fn reverse_key_from_address_and_contact() {
    let service = service();

    let addresses = service
        .search(
            &AddressFilter {
                client_name: Some("an".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(
        addresses.content.iter().map(|a| a.id).collect::<Vec<_>>(),
        vec![30]
    );

    let contacts = service
        .search(
            &ContactFilter {
                client_name: Some("bruno".into()),
                area_code: Some("19".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(
        contacts.content.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![41]
    );
}

#[tokio::test]
async fn yard_filters_by_dates_and_relations() {
    let service = service();

    let page = service
        .search(
            &YardFilter {
                entry_from: Some("2024-01-10".into()),
                entry_to: Some("2024-01-10".into()),
                address_city: Some("paulo".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.content.iter().map(|y| y.id).collect::<Vec<_>>(), vec![10]);

    let page = service
        .search(
            &YardFilter {
                vehicle_plate: Some("DEF4G56".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.content.iter().map(|y| y.id).collect::<Vec<_>>(), vec![11]);
}

#[tokio::test]
async fn tracking_by_day_and_vehicle() {
    let page = service()
        .search(
            &TrackingFilter {
                recorded_from: Some("2024-05-01".into()),
                recorded_to: Some("2024-05-01".into()),
                vehicle_plate: Some("ABC1D23".into()),
                ips_x: Some("12.5".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total_elements, 1);
    assert_eq!(page.content[0].id, 70);

    let page = service()
        .search(
            &TrackingFilter {
                recorded_to: Some("2024-04-30".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total_elements, 0);
}

#[tokio::test]
async fn date_only_upper_bound_covers_the_whole_day() {
    let mut fleet = fleet();
    let mut late = fleet.tracking[0].clone();
    late.id = 71;
    late.recorded_at = date(2024, 5, 1).and_hms_milli_opt(23, 59, 59, 500).unwrap();
    fleet.tracking.push(late);

    let page = SearchService::new(fleet)
        .search(
            &TrackingFilter {
                recorded_from: Some("2024-05-01".into()),
                recorded_to: Some("2024-05-01".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.content.iter().map(|t| t.id).collect::<Vec<_>>(), vec![70, 71]);
}

/// Segunda zona en el Pátio Sul con un box propio
fn fleet_with_second_zone() -> InMemoryFleet {
    let mut fleet = fleet();
    fleet.zones.push(Zone {
        id: 51,
        name: "Zona B".to_string(),
        entry_date: date(2024, 3, 1),
        exit_date: date(2024, 12, 20),
        note: None,
    });
    fleet.boxes.push(ParkingBox {
        id: 61,
        name: "Box B1".to_string(),
        status: "O".to_string(),
        entry_date: date(2024, 3, 1),
        exit_date: date(2024, 12, 20),
        note: None,
    });
    fleet.link(Relation::ZoneYards, 51, 11).unwrap();
    fleet.link(Relation::BoxZones, 61, 51).unwrap();
    fleet
}

#[tokio::test]
async fn box_filter_reaches_zone_and_vehicle() {
    let service = SearchService::new(fleet_with_second_zone());

    let ids = |page: PageResponse<ParkingBox>| {
        page.content.into_iter().map(|b| b.id).collect::<Vec<_>>()
    };

    let page = service
        .search(
            &BoxFilter {
                zone_name: Some("zona b".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(ids(page), vec![61]);

    let page = service
        .search(
            &BoxFilter {
                vehicle_plate: Some("ABC1D23".into()),
                zone_name: Some("zona".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(ids(page), vec![60]);
}

#[tokio::test]
async fn zone_filter_reaches_boxes_and_yards() {
    let service = SearchService::new(fleet_with_second_zone());

    let ids = |page: PageResponse<Zone>| {
        page.content.into_iter().map(|z| z.id).collect::<Vec<_>>()
    };

    let page = service
        .search(
            &ZoneFilter {
                yard_name: Some("sul".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(ids(page), vec![51]);

    let page = service
        .search(
            &ZoneFilter {
                box_name: Some("a1".into()),
                yard_name: Some("norte".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(ids(page), vec![50]);

    let page = service
        .search(
            &ZoneFilter {
                box_name: Some("b1".into()),
                yard_name: Some("norte".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap();
    assert_eq!(page.total_elements, 0);
}

#[tokio::test]
async fn inverted_range_fails_before_search() {
    let err = service()
        .search(
            &VehicleFilter {
                year_from: Some("2022".into()),
                year_to: Some("2019".into()),
                ..Default::default()
            },
            &PageRequest::default(),
        )
        .await
        .unwrap_err();

    match err {
        AppError::Filter(FilterError::Validation { field, .. }) => assert_eq!(field, "year_from"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn sorted_pages() {
    let request = PageRequest {
        page: Some("1".into()),
        size: Some("2".into()),
        sort: Some("year,desc".into()),
    };
    let page = service()
        .search(&VehicleFilter::default(), &request)
        .await
        .unwrap();

    assert_eq!(page.total_elements, 5);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.content.iter().map(|v| v.id).collect::<Vec<_>>(), vec![4, 1]);
}

#[tokio::test]
async fn find_by_id_reports_missing_rows() {
    let service = service();

    let vehicle: Vehicle = service.find_by_id(3).await.unwrap();
    assert_eq!(vehicle.plate, "GHI7J89");

    let err = service.find_by_id::<Yard>(99).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
