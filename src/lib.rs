//! Client-side core for the cluster admin panel: the resource
//! provisioning workflow (catalog, template cache, workspace, creation
//! orchestrator) and the persisted session store.
//!
//! The rendering layer and the remote endpoints are out of scope; they
//! plug in through [`api::PanelApi`] and [`storage::KvStore`].

pub mod api;
pub mod catalog;
pub mod create;
pub mod models;
pub mod session;
pub mod storage;
pub mod template;
pub mod workspace;
