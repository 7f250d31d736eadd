//! Shared fixtures for HTTP-level tests.
//!
//! Each test starts its own `wiremock` server and points a client at it
//! through `ClientConfig::with_base_url`.

#![allow(dead_code, unreachable_pub)]

use std::io::Cursor;

use cpc_fetch::CpcApi;
use cpc_types::{ClientConfig, Legislature, ParliamentType};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Creates a deputies client for the given legislature, aimed at the stub server.
pub fn deputies_client(server: &MockServer, legislature: Legislature) -> CpcApi {
    client(server, ParliamentType::Depute, legislature)
}

/// Creates a client for any supported body/legislature pair, aimed at the stub server.
pub fn client(server: &MockServer, ptype: ParliamentType, legislature: Legislature) -> CpcApi {
    let config = ClientConfig::new(ptype, legislature)
        .expect("supported pair")
        .with_base_url(server.uri())
        .expect("stub server URL");
    CpcApi::new(config).expect("client build")
}

/// A deputy record as nosdeputes.fr serves it.
pub fn deputy(slug: &str, nom: &str, famille: &str) -> Value {
    json!({
        "id": 1,
        "nom": nom,
        "nom_de_famille": famille,
        "prenom": nom.split(' ').next().unwrap_or_default(),
        "sexe": "H",
        "nom_circo": "Paris",
        "num_circo": 1,
        "mandat_debut": "2017-06-21",
        "groupe_sigle": "NI",
        "id_an": "1008",
        "slug": slug,
        "url_nosdeputes": format!("https://2017-2022.nosdeputes.fr/{slug}")
    })
}

/// Wraps records in the list envelope: `{plural: [{singular: record}]}`.
pub fn wrap_list(plural: &str, singular: &str, records: Vec<Value>) -> Value {
    let items: Vec<Value> = records
        .into_iter()
        .map(|r| json!({ singular: r }))
        .collect();
    json!({ plural: items })
}

/// A vote record as the votes endpoint serves it.
pub fn vote(numero: u64, slug: &str, position: &str) -> Value {
    json!({
        "vote": {
            "scrutin": {
                "numero": numero,
                "date": "2018-05-30",
                "type": "ordinaire",
                "sort": "rejeté",
                "titre": format!("amendement n° {numero}"),
                "nombre_votants": 80,
                "nombre_pours": 20,
                "nombre_contres": 60,
                "nombre_abstentions": 0
            },
            "parlementaire_slug": slug,
            "parlementaire_groupe_acronyme": "FI",
            "position": position,
            "position_groupe": "pour",
            "par_delegation": false
        }
    })
}

/// Encodes a solid PNG of the given size.
pub fn png(width: u32, height: u32) -> Vec<u8> {
    let img = RgbaImage::from_pixel(width, height, Rgba([200, 150, 100, 255]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("png encoding");
    buf
}
