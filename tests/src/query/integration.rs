use std::fs;
use std::net::Ipv4Addr;

use mksnmp_common::device::{DeviceRecord, Field, FieldValue};
use mksnmp_common::network::range::ScanRange;
use mksnmp_common::network::target::Target;
use mksnmp_core::export::{self, CSV_HEADER};

use crate::support::{FakeDevice, FakeNetwork, csv_path, scanner, scratch_dir};

fn read_csv(path: &std::path::Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_path(path).unwrap();
    let header: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|row| row.unwrap().iter().map(String::from).collect())
        .collect();
    (header, rows)
}

#[tokio::test]
async fn single_device_fills_every_column() {
    let dir = scratch_dir();
    let addr = Ipv4Addr::new(192, 168, 1, 10);
    let network = FakeNetwork::default().with_device(addr, FakeDevice::complete("public", addr));
    let path = csv_path(&dir, "single");

    let report = scanner(network, "public")
        .run(&Target::Host { target_addr: addr })
        .await;
    export::write_csv(&path, &report.records).unwrap();

    let (header, rows) = read_csv(&path);
    assert_eq!(header, CSV_HEADER);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "192.168.1.10");
    assert_eq!(rows[0][1], "KONICA MINOLTA bizhub C360i");
    assert_eq!(rows[0][3], "Floor 2, Copy Room");
    assert_eq!(rows[0][10], "8.8.8.8");
    assert!(rows[0].iter().all(|cell| !cell.is_empty()));
}

#[tokio::test]
async fn range_reports_only_the_answering_host() {
    let dir = scratch_dir();
    let alive = Ipv4Addr::new(192, 168, 1, 2);
    let network = FakeNetwork::default().with_device(alive, FakeDevice::complete("public", alive));
    let path = csv_path(&dir, "range");

    let target = Target::from_bounds(Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 3)).unwrap();
    let report = scanner(network, "public").run(&target).await;
    export::write_csv(&path, &report.records).unwrap();

    assert_eq!(report.probed, 3);
    assert_eq!(report.unreachable, 2);
    let (_, rows) = read_csv(&path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "192.168.1.2");
}

#[tokio::test]
async fn community_must_match_the_device() {
    let dir = scratch_dir();
    let addr = Ipv4Addr::new(10, 0, 0, 5);
    let network = || FakeNetwork::default().with_device(addr, FakeDevice::complete("private", addr));
    let target = Target::Host { target_addr: addr };

    let with_private = scanner(network(), "private").run(&target).await;
    assert_eq!(with_private.records.len(), 1);

    let path = csv_path(&dir, "wrong-community");
    let with_public = scanner(network(), "public").run(&target).await;
    export::write_csv(&path, &with_public.records).unwrap();

    assert!(with_public.records.is_empty());
    let (header, rows) = read_csv(&path);
    assert_eq!(header, CSV_HEADER);
    assert!(rows.is_empty());
}

#[tokio::test]
async fn partial_device_keeps_columns_aligned() {
    let dir = scratch_dir();
    let addr = Ipv4Addr::new(10, 0, 0, 9);
    let device = FakeDevice::new("public")
        .with(Field::Model, "bizhub 4750i")
        .with(Field::Gateway, "10.0.0.1");
    let network = FakeNetwork::default().with_device(addr, device);
    let path = csv_path(&dir, "partial");

    let report = scanner(network, "public").run(&Target::Host { target_addr: addr }).await;
    export::write_csv(&path, &report.records).unwrap();

    let record: &DeviceRecord = &report.records[0];
    assert_eq!(record.get(Field::Location), &FieldValue::Missing);
    assert_eq!(record.present_count(), 2);

    let (_, rows) = read_csv(&path);
    assert_eq!(rows[0].len(), CSV_HEADER.len());
    assert_eq!(rows[0][1], "bizhub 4750i");
    assert_eq!(rows[0][2], "");
    assert_eq!(rows[0][8], "10.0.0.1");
}

#[tokio::test]
async fn scan_crosses_octet_boundary_in_order() {
    let addrs = [
        Ipv4Addr::new(192, 168, 1, 255),
        Ipv4Addr::new(192, 168, 2, 0),
        Ipv4Addr::new(192, 168, 2, 1),
    ];
    let network = addrs.iter().fold(FakeNetwork::default(), |net, addr| {
        net.with_device(*addr, FakeDevice::complete("public", *addr))
    });

    let report = scanner(network, "public")
        .with_jobs(4)
        .scan(ScanRange::new(Ipv4Addr::new(192, 168, 1, 254), Ipv4Addr::new(192, 168, 2, 1)))
        .await;

    let found: Vec<Ipv4Addr> = report.records.iter().map(DeviceRecord::address).collect();
    assert_eq!(found, addrs);
    assert_eq!(report.probed, 4);
}

#[tokio::test]
async fn repeated_scans_write_identical_files() {
    let dir = scratch_dir();
    let addr = Ipv4Addr::new(172, 16, 0, 4);
    let network = || FakeNetwork::default().with_device(addr, FakeDevice::complete("public", addr));
    let target = Target::from_expression("172.16.0.1-8").unwrap();
    let first = csv_path(&dir, "repeat-a");
    let second = csv_path(&dir, "repeat-b");

    let report = scanner(network(), "public").run(&target).await;
    export::write_csv(&first, &report.records).unwrap();
    let report = scanner(network(), "public").run(&target).await;
    export::write_csv(&second, &report.records).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}
