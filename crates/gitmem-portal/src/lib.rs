//! gitmem-portal - Portal SDK variant for the Git Memory MCP Server.
//!
//! A deliberately separate, simpler client than `gitmem-client`: one object
//! merging session and credentials, with an eager login that stores the
//! bearer token for all later calls. The portal backend names its token
//! field `accessToken` where the main API names it `token`; the two SDKs
//! stay independent so neither shape leaks into the other.

mod client;

pub use client::PortalClient;
