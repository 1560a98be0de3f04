//! Static movie catalog and welcome payloads. No I/O.

pub mod handlers;
pub mod routes;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Movie {
    pub id: u32,
    pub titulo: &'static str,
    pub ano: u16,
}

pub const MOVIES: [Movie; 3] = [
    Movie {
        id: 1,
        titulo: "Matrix",
        ano: 1999,
    },
    Movie {
        id: 2,
        titulo: "Inception",
        ano: 2010,
    },
    Movie {
        id: 3,
        titulo: "Interstellar",
        ano: 2014,
    },
];

pub use routes::{review_api_routes, static_api_routes};
