//! Shared constants for end-to-end tests
//!
//! This module contains all constants used across the test suite.
//! When the test artifacts change, update only this file.

#![allow(dead_code)]

// ============================================================================
// Test Catalog Artists
// ============================================================================

pub const LINKIN_PARK: &str = "linkin park";
pub const BEYONCE: &str = "beyoncé";
pub const COLDPLAY: &str = "coldplay";

// ============================================================================
// Test Catalog Songs
// ============================================================================

/// Only in the full catalog, nobody listened to it.
pub const CRAWLING_NAME: &str = "crawling";
pub const CRAWLING_ID: &str = "track-crawling";

pub const NUMB_NAME: &str = "numb";
pub const NUMB_ID: &str = "track-numb";

pub const IN_THE_END_NAME: &str = "in the end";
pub const IN_THE_END_ID: &str = "track-in-the-end";

pub const HALO_NAME: &str = "halo";
pub const HALO_ID: &str = "track-halo";

pub const CRAZY_IN_LOVE_NAME: &str = "crazy in love";
pub const CRAZY_IN_LOVE_ID: &str = "track-crazy-in-love";

pub const YELLOW_NAME: &str = "yellow";
pub const YELLOW_ID: &str = "track-yellow";

// ============================================================================
// Test Catalog Counts
// ============================================================================

pub const CATALOG_SONGS: usize = 6;
pub const CATALOG_ARTISTS: usize = 3;
pub const HYBRID_SONGS: usize = 5;
pub const INTERACTION_USERS: usize = 4;
pub const INTERACTIONS: usize = 7;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
