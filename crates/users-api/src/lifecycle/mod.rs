//! # System Lifecycle
//!
//! [`UserSystem`] starts the user actor, hands out its client and stops it
//! again.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor cleans up** - logs its final size and returns
//! 4. **Await completion** - [`UserSystem::shutdown`] joins the task
//!
//! Every clone handed out through [`UserSystem::store`] must be dropped
//! (for the HTTP server: the router must have been dropped) before
//! `shutdown` can complete.

use crate::clients::UserClient;
use crate::store::UserStore;
use crate::user_actor::{self, UserError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::info;

/// Owns the running user actor.
pub struct UserSystem {
    pub user_client: UserClient,
    handle: JoinHandle<()>,
}

impl UserSystem {
    /// Spawns the user actor on the current Tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        let (actor, user_client) = user_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run(()));
        info!(buffer_size, "User system started");

        Self {
            user_client,
            handle,
        }
    }

    /// The store as the HTTP layer sees it.
    pub fn store(&self) -> Arc<dyn UserStore> {
        Arc::new(self.user_client.clone())
    }

    /// Drops this system's client and waits for the actor to finish.
    pub async fn shutdown(self) -> Result<(), UserError> {
        info!("Shutting down user system");
        drop(self.user_client);
        self.handle
            .await
            .map_err(|e| UserError::ActorCommunicationError(e.to_string()))?;
        info!("User system stopped");
        Ok(())
    }
}
