//! Title Desk - ClickUp title order backend
//!
//! Proxies the ClickUp OAuth flow and task endpoints for the title order
//! frontend, and renders title order records to PDF through a LaTeX
//! template and pdflatex.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
