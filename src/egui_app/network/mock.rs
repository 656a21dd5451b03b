//! Canned responses for the simulated responder
//!
//! Login credentials that the mock recognizes:
//!
//! | Username      | Password       | Outcome                      |
//! |---------------|----------------|------------------------------|
//! | `61917612998` | `Contrasena01` | success                      |
//! | `61998018420` | `Contrasena02` | success                      |
//! | `61900000000` | `ServerError`  | `ServerError(500)`           |
//! | `61922222222` | `Timeout0000`  | hangs, then `Timeout`        |
//!
//! Any other pair is rejected as `Unauthorized`.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::shared::benevit::{Ally, Benevit, BenevitsResponse, SearchResponse};

/// Token handed out on a successful mock login
pub const MOCK_TOKEN: &str = "mock-jwt-token-12345";

/// What a recognized credential pair does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialScenario {
    Success,
    ServerError,
    Timeout,
}

struct ValidCredential {
    username: &'static str,
    password: &'static str,
    scenario: CredentialScenario,
}

const VALID_CREDENTIALS: &[ValidCredential] = &[
    ValidCredential {
        username: "61917612998",
        password: "Contrasena01",
        scenario: CredentialScenario::Success,
    },
    ValidCredential {
        username: "61998018420",
        password: "Contrasena02",
        scenario: CredentialScenario::Success,
    },
    ValidCredential {
        username: "61900000000",
        password: "ServerError",
        scenario: CredentialScenario::ServerError,
    },
    ValidCredential {
        username: "61922222222",
        password: "Timeout0000",
        scenario: CredentialScenario::Timeout,
    },
];

/// Scenario for a credential pair, `None` when unknown
pub fn validate_credentials(username: &str, password: &str) -> Option<CredentialScenario> {
    VALID_CREDENTIALS
        .iter()
        .find(|c| c.username == username && c.password == password)
        .map(|c| c.scenario)
}

/// Headers returned with every successful mock response
pub fn mock_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer mock-jwt-token-12345"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

fn ally(id: i64, name: &str, color: &str, label: &str) -> Ally {
    Ally {
        id,
        name: name.to_string(),
        logo_full_path: Some(format!("https://via.placeholder.com/200x100/{}/FFFFFF?text={}", color, label)),
        mini_logo_full_path: Some(format!("https://via.placeholder.com/100x50/{}/FFFFFF?text={}", color, label)),
    }
}

fn benevit(
    id: i64,
    name: &str,
    description: &str,
    vector: Option<&str>,
    ally: Option<&Ally>,
    category: &str,
    expiration: &str,
) -> Benevit {
    Benevit {
        id,
        name: name.to_string(),
        description: Some(description.to_string()),
        vector_full_path: vector.map(|label| format!("https://via.placeholder.com/300x150/EC5056/FFFFFF?text={}", label)),
        ally: ally.cloned(),
        category: Some(category.to_string()),
        expiration_date: Some(expiration.to_string()),
        is_locked: false,
    }
}

/// Landing payload: 3 locked offers, 12 unlocked ones across four allies
pub fn benevits_response() -> BenevitsResponse {
    let devlyn = ally(1, "Devlyn", "0066CC", "Devlyn");
    let rappi = ally(2, "Rappi", "FF6B00", "Rappi");
    let izzi = ally(3, "Izzi", "00A651", "izzi");
    let xbox = ally(4, "Xbox", "107C10", "XBOX");

    let locked = vec![
        benevit(1, "20% en lentes Devlyn", "20% de descuento en lentes oftálmicos y lentes de sol", Some("Devlyn+20%25"), None, "Salud", "2024-12-31"),
        benevit(2, "Xbox Game Pass Ultimate", "3 meses de Xbox Game Pass Ultimate con 25% de descuento", Some("Xbox+Pass"), None, "Entretenimiento", "2024-11-30"),
        benevit(3, "Rappi Prime gratis", "30 días de Rappi Prime sin costo para socios", Some("Rappi+Prime"), None, "Servicios", "2024-10-31"),
    ];

    let unlocked = vec![
        benevit(4, "15% en armazones y micas", "Descuento especial en toda la línea de armazones y micas oftálmicas", None, Some(&devlyn), "Salud", "2024-12-31"),
        benevit(5, "Internet 100 Mbps con descuento", "Contrata Izzi 100 Mbps con 20% de descuento durante 6 meses", None, Some(&izzi), "Telecomunicaciones", "2024-11-15"),
        benevit(6, "Xbox Series S con ahorro", "Consola Xbox Series S con 15% de descuento y meses sin intereses", None, Some(&xbox), "Electrónicos", "2024-10-31"),
        benevit(7, "Envíos gratis en Rappi", "Envíos gratis ilimitados durante todo el mes con Rappi Prime", None, Some(&rappi), "Servicios", "2024-12-31"),
        benevit(8, "Examen de la vista gratis", "Examen de la vista sin costo con la compra de armazón", None, Some(&devlyn), "Salud", "2024-09-30"),
        benevit(9, "Rappi Turbo sin costo", "Entregas ultra rápidas sin costo adicional por 60 días", None, Some(&rappi), "Servicios", "2024-11-30"),
        benevit(10, "Micas transition gratis", "Micas fotocromáticas sin costo extra en armazones seleccionados", None, Some(&devlyn), "Salud", "2024-12-15"),
        benevit(11, "Xbox Game Pass 3 meses", "3 meses de acceso a más de 100 juegos con Game Pass", None, Some(&xbox), "Entretenimiento", "2024-10-20"),
        benevit(12, "Internet fibra óptica 200 Mbps", "Upgrade a 200 Mbps fibra óptica con instalación gratis", None, Some(&izzi), "Telecomunicaciones", "2024-11-25"),
        benevit(13, "Rappi Restaurantes 2x1", "2x1 en restaurantes seleccionados todos los martes", None, Some(&rappi), "Alimentos", "2024-12-20"),
        benevit(14, "Lentes de contacto con descuento", "20% en lentes de contacto mensuales y desechables", None, Some(&devlyn), "Salud", "2024-10-15"),
        benevit(15, "Control Xbox sin costo", "Control inalámbrico gratis en compra de Xbox Series", None, Some(&xbox), "Accesorios", "2024-11-10"),
    ];

    BenevitsResponse { locked, unlocked }
}

/// Search payload; the mock ignores the query
pub fn search_response() -> SearchResponse {
    let microsoft = ally(1, "Microsoft", "0078D4", "MS");

    SearchResponse {
        benevits: vec![
            benevit(1, "Xbox Game Pass Ultimate", "3 meses de Xbox Game Pass Ultimate con descuento", None, Some(&microsoft), "Gaming", "2024-12-31"),
            benevit(2, "Xbox Series S", "Consola Xbox Series S con 15% de descuento", None, Some(&microsoft), "Consolas", "2024-11-30"),
        ],
    }
}
