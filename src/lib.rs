#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Admin Console
//!
//! > **A generic entity CRUD lifecycle over a REST backend.**
//!
//! This crate is a headless administrative client for simple record kinds
//! (coffees and customers) managed through a REST API. The interesting part
//! is not any single operation: it is that the whole
//! list/update/delete/resolve lifecycle is written **once**, generically,
//! and instantiated per record kind via a descriptor trait instead of being
//! copied per kind.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a descriptor trait?
//!
//! An admin client's screens are mechanically uniform: fetch a list, patch a
//! form, submit, navigate back. Writing that per entity multiplies every bug
//! by the number of entities. Here one generic engine carries the lifecycle
//! and each record kind contributes only what actually differs:
//! - its REST collection path,
//! - its identity extraction,
//! - its blank-record template,
//! - its declarative form constraints.
//!
//! ### Generics: The Power of `T`
//! You'll see `EntityService<T: RestEntity>` everywhere. This means "I can
//! manage *any* record kind, as long as it describes itself as a
//! `RestEntity`." The routing rule at the heart of the client (a record
//! with an id goes to update, a record without one goes to create) is
//! enforced in exactly one place.
//!
//! ### Mocking: Testing without a backend
//! Every network exchange crosses the [`framework::Transport`] seam, so
//! tests script a [`framework::mock::MockTransport`] with the exact
//! requests they expect and the responses to play back. Navigation crosses
//! the [`nav::Navigator`] seam the same way.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Identity routes everything
//! `id` is optional by design: absent means new and unsaved, present means
//! persisted. Create refuses a record with an id; update and partial-update
//! refuse one without. Collection merging dedupes strictly by id, and
//! records with no id never match anything.
//!
//! ### 2. Errors are a taxonomy, not a string
//! [`framework::ServiceError`] separates transport failures from unexpected
//! statuses from undecodable bodies from identity violations. An
//! empty-bodied find is *not* an error; it is a valid "not found" and the
//! resolver turns it into a redirect instead of a failure.
//!
//! ### 3. Views own their request lifecycles
//! Each view holds its own service handle and flags (`is_loading`,
//! `is_saving`); nothing is shared across views except the record handed
//! through route data and dialog inputs. In-flight requests are not
//! cancelled when a view goes away.
//!
//! ### 4. Observability
//! `tracing` with structured fields throughout: `entity_type` on every
//! engine operation, spans on resolution and saves. See
//! [`lifecycle::tracing`] for setup and filtering.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic service, resolver, transport seam, and error taxonomy.
//! - **Key items**: [`framework::RestEntity`], [`framework::EntityService`],
//!   [`framework::EntityResolver`].
//!
//! ### 2. The Form Layer ([`form`])
//! Editable working copies and declarative per-field constraints that gate
//! submission before anything reaches the network.
//!
//! ### 3. The Components ([`view`])
//! List, detail, update, and delete-dialog views, generic over the record
//! kind. The dialog closes with an explicit [`view::DialogOutcome`], not a
//! sentinel string.
//!
//! ### 4. The Record Kinds ([`model`], [`coffee`], [`customer`])
//! Pure data structs plus their descriptor implementations and wiring
//! constructors.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`lifecycle::AdminConsole`] wires one transport, one navigator, and a
//! service/resolver pair per record kind.
//!
//! ## 🚀 Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod coffee;
pub mod customer;
pub mod form;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod nav;
pub mod view;
