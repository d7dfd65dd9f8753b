// Binding modules
//
// `GenericModule` provides the unconfigured service. Each client module
// derives its own tag from `generic` by applying that client's setup.

pub mod client1;
pub mod client2;
pub mod generic;

pub use client1::Client1Module;
pub use client2::Client2Module;
pub use generic::GenericModule;

use crate::binding::Module;

/// The modules a production composition installs, in install order
pub fn production_modules(generic: GenericModule) -> Vec<Box<dyn Module>> {
    vec![
        Box::new(generic),
        Box::new(Client1Module),
        Box::new(Client2Module),
    ]
}
