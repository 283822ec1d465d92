//! Protobuf messages and client stubs for the Talos machine API.

#[allow(clippy::all)]
pub mod machine {
    include!("generated/machine.rs");
}
