#![allow(dead_code)]

use log::LevelFilter;
use std::{
    collections::{BTreeMap, BTreeSet},
    env,
};
use turret::{ClusteringKey, Column, Counter, PartitionKey, Regular, Static, Table, TableRef};
use uuid::Uuid;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

pub struct Users {
    pub table: TableRef,
    pub id: Column<String, PartitionKey>,
    pub name: Column<String, Regular>,
    pub city: Column<String, Regular>,
    pub age: Column<i32, Regular>,
    pub nickname: Column<Option<String>, Regular>,
    pub scores: Column<Vec<i32>, Regular>,
    pub emails: Column<BTreeSet<String>, Regular>,
    pub tags: Column<BTreeMap<String, String>, Regular>,
}

impl Table for Users {
    fn table_ref(&self) -> &TableRef {
        &self.table
    }
}

pub static USERS: Users = Users {
    table: TableRef::new("users"),
    id: Column::new("id"),
    name: Column::new("name"),
    city: Column::new("city"),
    age: Column::new("age"),
    nickname: Column::new("nickname"),
    scores: Column::new("scores"),
    emails: Column::new("emails"),
    tags: Column::new("tags"),
};

/// Time series, one partition per device.
pub struct Events {
    pub table: TableRef,
    pub device: Column<Uuid, PartitionKey>,
    pub at: Column<i64, ClusteringKey>,
    pub seq: Column<i32, ClusteringKey>,
    pub payload: Column<String, Regular>,
    pub owner: Column<String, Static>,
}

impl Table for Events {
    fn table_ref(&self) -> &TableRef {
        &self.table
    }
}

pub static EVENTS: Events = Events {
    table: TableRef::with_keyspace("telemetry", "events"),
    device: Column::new("device"),
    at: Column::new("at"),
    seq: Column::new("seq"),
    payload: Column::new("payload"),
    owner: Column::new("owner"),
};

pub struct PageViews {
    pub table: TableRef,
    pub page: Column<String, PartitionKey>,
    pub views: Column<Counter, Regular>,
}

impl Table for PageViews {
    fn table_ref(&self) -> &TableRef {
        &self.table
    }
}

pub static PAGE_VIEWS: PageViews = PageViews {
    table: TableRef::new("page_views"),
    page: Column::new("page"),
    views: Column::new("views"),
};
