//! # Tally - Invoices Dashboard Backend
//!
//! This is a facade crate that re-exports all public APIs from the workspace.
//! Use this crate to get credential authentication and the invoice form
//! actions in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `InvoiceDraft`, `FieldErrors`, etc.
//! - **Repository traits**: `UserStore`, `InvoiceStore`, `PasswordHashing`, `PathRevalidator`
//! - **Use cases**: `AuthenticateUseCase`, `MutationExecutor`, `InvoiceActions`
//! - **Adapters**: `PostgresUserStore`, `PostgresInvoiceStore`, `Argon2Hasher`, `ListingCache`
//! - **Service**: `TallyService` - The HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use tally_core::*;
}

// Re-export most commonly used core types at the root level
pub use tally_core::{
    Amount, AuthenticatedUser, Credentials, CustomerId, Email, FieldErrors, FormState, Invoice,
    InvoiceDraft, InvoiceForm, InvoiceId, InvoiceStatus, MutationOutcome, Password, Redirect,
    UserRecord, ValidationResult,
};

// ============================================================================
// Ports
// ============================================================================

pub use tally_core::{
    InvoiceStore, InvoiceStoreError, PasswordHashing, PathRevalidator, UserStore, UserStoreError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use tally_application::*;
}

pub use tally_application::{
    ActionResult, AuthError, AuthenticateUseCase, DeletePolicy, InvoiceActions,
    ListInvoicesUseCase, Mutation, MutationExecutor, MutationFault,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP routes
    pub mod http {
        pub use tally_axum::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use tally_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use tally_adapters::hashing::*;
    }

    /// Listing cache
    pub mod cache {
        pub use tally_adapters::cache::*;
    }

    /// Configuration
    pub mod config {
        pub use tally_adapters::config::*;
    }
}

pub use tally_adapters::{
    cache::ListingCache,
    config::Settings,
    hashing::Argon2Hasher,
    persistence::{HashMapInvoiceStore, HashMapUserStore, PostgresInvoiceStore, PostgresUserStore},
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use tally_service::{TallyService, configure_postgresql, get_postgres_pool, run_migrations};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the ports
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
