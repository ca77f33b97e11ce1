use std::net::SocketAddr;

use async_trait::async_trait;
use rand::Rng;
use snmp2::AsyncSession;
use tracing::trace;

use mksnmp_common::config::SnmpVersion;
use mksnmp_common::error::QueryError;
use mksnmp_protocols::{ObjectId, catalog, value};

/// A single GET for one object on one agent.
#[derive(Debug, Clone, Copy)]
pub struct GetRequest<'a> {
    pub target: SocketAddr,
    pub community: &'a str,
    pub version: SnmpVersion,
    pub oid: &'a ObjectId,
}

/// Sends SNMP GET requests.
///
/// Implementations make exactly one attempt per call; time bounds and
/// retries are applied by the caller.
#[async_trait]
pub trait SnmpClient: Send + Sync {
    async fn get(&self, request: &GetRequest<'_>) -> Result<String, QueryError>;
}

/// [`SnmpClient`] over UDP, one `snmp2` session per request.
#[derive(Debug, Default, Clone, Copy)]
pub struct UdpSnmpClient;

#[async_trait]
impl SnmpClient for UdpSnmpClient {
    async fn get(&self, request: &GetRequest<'_>) -> Result<String, QueryError> {
        let oid = request
            .oid
            .to_snmp()
            .map_err(|e| QueryError::Decode(e.to_string()))?;
        let req_id: i32 = rand::rng().random_range(1..i32::MAX);
        let community = request.community.as_bytes();

        let session = match request.version {
            SnmpVersion::V1 => AsyncSession::new_v1(request.target, community, req_id).await,
            SnmpVersion::V2c => AsyncSession::new_v2c(request.target, community, req_id).await,
        };
        let mut session = session.map_err(|e| QueryError::Transport(e.to_string()))?;

        trace!("GET {} from {}", request.oid, request.target);
        let pdu = session.get(&oid).await.map_err(classify_error)?;

        if pdu.error_status != 0 {
            return Err(QueryError::Agent {
                status: pdu.error_status,
            });
        }

        let mut varbinds = pdu.varbinds;
        let Some((name, val)) = varbinds.next() else {
            return Err(QueryError::Decode("response carried no varbinds".into()));
        };

        let answered = ObjectId::from_snmp(&name).map_err(|e| QueryError::Decode(e.to_string()))?;
        if &answered != request.oid {
            return Err(QueryError::Decode(format!(
                "asked for {} ({:?}), agent answered {}",
                request.oid,
                catalog::field_for(request.oid),
                answered
            )));
        }

        value::render(&val)
    }
}

/// Socket failures mean the agent never answered; everything else came off the wire.
fn classify_error(e: snmp2::Error) -> QueryError {
    match e {
        snmp2::Error::Send | snmp2::Error::Receive => QueryError::Transport(e.to_string()),
        other => QueryError::Decode(other.to_string()),
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
