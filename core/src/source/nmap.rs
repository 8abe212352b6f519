//! nmap XML (`-oX`) documents.
//!
//! Only the parts needed to build an [`Observation`] are modelled; every other
//! element and attribute is skipped by the deserializer.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use svcmap_common::models::{Observation, PortState};

use super::SourceError;

const ROOT_ELEMENT: &str = "nmaprun";

#[derive(Debug, Default, Deserialize)]
struct NmapRun {
    #[serde(rename = "host", default)]
    hosts: Vec<HostElement>,
}

#[derive(Debug, Default, Deserialize)]
struct HostElement {
    #[serde(rename = "address", default)]
    addresses: Vec<AddressElement>,
    #[serde(default)]
    ports: PortsElement,
}

#[derive(Debug, Default, Deserialize)]
struct AddressElement {
    #[serde(rename = "@addr", default)]
    addr: String,
}

#[derive(Debug, Default, Deserialize)]
struct PortsElement {
    #[serde(rename = "port", default)]
    ports: Vec<PortElement>,
}

#[derive(Debug, Default, Deserialize)]
struct PortElement {
    #[serde(rename = "@portid", default)]
    portid: String,
    #[serde(default)]
    state: Option<StateElement>,
    #[serde(default)]
    service: Option<ServiceElement>,
}

#[derive(Debug, Default, Deserialize)]
struct StateElement {
    #[serde(rename = "@state", default)]
    state: String,
}

#[derive(Debug, Default, Deserialize)]
struct ServiceElement {
    #[serde(rename = "@name", default)]
    name: String,
    #[serde(rename = "@product", default)]
    product: String,
    #[serde(rename = "@version", default)]
    version: String,
}

/// Parses one nmap XML document into one observation per `<port>` of every
/// `<host>`.
///
/// The host string is the first `<address>` of the host, or empty when the
/// host has none.
pub fn parse_observations(xml: &str) -> Result<Vec<Observation>, SourceError> {
    check_root(xml)?;
    let run: NmapRun = quick_xml::de::from_str(xml)?;

    let observations = run
        .hosts
        .into_iter()
        .flat_map(|host| {
            let addr: String = host
                .addresses
                .into_iter()
                .next()
                .map(|address| address.addr)
                .unwrap_or_default();

            host.ports
                .ports
                .into_iter()
                .map(move |port| to_observation(&addr, port))
        })
        .collect();

    Ok(observations)
}

fn to_observation(host: &str, port: PortElement) -> Observation {
    let state: PortState = port
        .state
        .map(|s| s.state.parse::<PortState>().unwrap_or_default())
        .unwrap_or_default();
    let service: ServiceElement = port.service.unwrap_or_default();

    Observation {
        host: host.to_string(),
        port: port.portid,
        state,
        service_name: service.name,
        product: service.product,
        version: service.version,
    }
}

/// Rejects documents whose first element is not `<nmaprun>`.
fn check_root(xml: &str) -> Result<(), SourceError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(element) | Event::Empty(element) => {
                let name = String::from_utf8_lossy(element.local_name().as_ref()).into_owned();
                return if name == ROOT_ELEMENT {
                    Ok(())
                } else {
                    Err(SourceError::UnexpectedRoot(name))
                };
            }
            Event::Eof => return Err(SourceError::Empty),
            _ => {}
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
