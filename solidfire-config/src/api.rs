//! Handle to the SolidFire control-plane API client.
//!
//! Only the interface the driver configuration needs lives here: building the
//! client from parameters and reading back what it was built with. Requests to
//! the backend are out of scope, so constructing a client performs no I/O.

use thiserror::Error;
use url::{ParseError, Position, Url};

use crate::{AccountId, DebugTraceFlags, Endpoint, RedactedFields, VolType};

/// Port used by the control plane when neither the endpoint nor its scheme names one.
pub const DEFAULT_API_PORT: u16 = 443;

/// Configuration handed to [`Client::from_parameters`].
#[derive(Clone, Default, PartialEq, Eq, RedactedFields)]
#[config(name = "api.Config")]
pub struct Config {
    #[sensitive]
    pub tenant_name: String,
    #[sensitive(Endpoint)]
    pub end_point: String,
    #[config(label = "SVIP")]
    pub svip: String,
    #[config(label = "InitiatorIFace", verbose)]
    pub initiator_iface: String,
    #[config(verbose)]
    pub types: Option<Vec<VolType>>,
    #[config(verbose)]
    pub legacy_name_prefix: String,
    #[config(verbose)]
    pub access_groups: Vec<i64>,
    #[config(verbose)]
    pub default_block_size: i64,
    #[config(trace_flags, verbose)]
    pub debug_trace_flags: DebugTraceFlags,
}

/// Reasons a client cannot be built.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The endpoint is empty.
    #[error("API endpoint is empty")]
    MissingEndpoint,
    /// The endpoint is not URL-shaped.
    #[error("invalid API endpoint: {0}")]
    InvalidEndpoint(&'static str),
    /// The storage virtual IP is empty.
    #[error("SVIP is empty")]
    MissingSvip,
}

/// A connected control-plane client.
///
/// The handle may hold session state and secondary credentials. Drivers list it
/// with `#[sensitive(always)]`, and its own representations hide everything
/// credential-bearing.
#[derive(Clone, RedactedFields)]
#[config(name = "api.Client")]
pub struct Client {
    #[config(flatten)]
    config: Config,
    #[config(label = "DefaultAPIPort", verbose)]
    default_api_port: u16,
    #[sensitive(AccountId)]
    #[config(label = "AccountID")]
    account_id: i64,
}

impl Client {
    /// Builds a client for `endpoint` and `svip`.
    ///
    /// `endpoint` and `svip` take precedence over the matching values in `config`.
    pub fn from_parameters(
        endpoint: impl Into<String>,
        svip: impl Into<String>,
        mut config: Config,
    ) -> Result<Self, Error> {
        let endpoint = endpoint.into();
        let svip = svip.into();
        if endpoint.is_empty() {
            return Err(Error::MissingEndpoint);
        }
        let url = parse_endpoint(&endpoint).map_err(Error::InvalidEndpoint)?;
        if svip.is_empty() {
            return Err(Error::MissingSvip);
        }
        let default_api_port = url.port_or_known_default().unwrap_or(DEFAULT_API_PORT);

        config.end_point = endpoint;
        config.svip = svip;
        Ok(Self {
            config,
            default_api_port,
            account_id: 0,
        })
    }

    /// The configuration the client was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Storage virtual IP used for iSCSI traffic.
    pub fn svip(&self) -> &str {
        &self.config.svip
    }

    /// Control-plane port.
    pub fn default_api_port(&self) -> u16 {
        self.default_api_port
    }

    /// Backend account the client acts for; `0` until one is assigned.
    pub fn account_id(&self) -> i64 {
        self.account_id
    }

    /// Records the backend account once it has been looked up or created.
    pub fn set_account_id(&mut self, account_id: i64) {
        self.account_id = account_id;
    }
}

/// Parses a control-plane endpoint.
///
/// The endpoint must be an absolute URL with a host. An `@` anywhere past a
/// well-formed `user:password@` prefix is rejected, since the credentials could
/// not be told apart from the rest of the URL. Reasons never echo the endpoint.
pub(crate) fn parse_endpoint(endpoint: &str) -> Result<Url, &'static str> {
    let url = Url::parse(endpoint).map_err(|err| match err {
        ParseError::RelativeUrlWithoutBase => "missing scheme",
        ParseError::EmptyHost => "missing host",
        ParseError::InvalidPort => "invalid port",
        _ => "malformed URL",
    })?;
    if !url.host_str().is_some_and(|host| !host.is_empty()) {
        return Err("missing host");
    }
    if url[Position::BeforeHost..].contains('@') {
        return Err("ambiguous credentials");
    }
    Ok(url)
}
