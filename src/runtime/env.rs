use crate::player::{PlayerConfig, PlayerRef, TryPlayerFuture};
use chrono::{DateTime, Utc};
use futures::Future;
use std::time::Duration;

pub use conditional_types::{ConditionalSend, EnvFuture, EnvFutureExt};

#[cfg(not(feature = "env-future-send"))]
/// Only for wasm or when `env-future-send` is not enabled
mod conditional_types {
    use futures::{future::LocalBoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = LocalBoxFuture<'a, T>;

    pub trait ConditionalSend {}

    impl<T> ConditionalSend for T {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + 'a,
        {
            self.boxed_local()
        }
    }
}

#[cfg(feature = "env-future-send")]
/// Enabled with the feature `env-future-send` but it requires a non-wasm target!
/// It will cause a compile-time error!
mod conditional_types {
    use futures::{future::BoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = BoxFuture<'a, T>;

    pub trait ConditionalSend: Send {}

    impl<T> ConditionalSend for T where T: Send {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + Send + 'a,
        {
            self.boxed()
        }
    }
}

impl<T: ?Sized> EnvFutureExt for T where T: Future {}

/// Host environment capabilities the control core runs against.
///
/// Exactly one player instantiation attempt happens per attach; the
/// returned handle is owned by the surface until detach.
pub trait Env {
    fn create_player(config: &PlayerConfig) -> TryPlayerFuture<PlayerRef>;
    fn exec_concurrent<F: Future<Output = ()> + ConditionalSend + 'static>(future: F);
    fn exec_sequential<F: Future<Output = ()> + ConditionalSend + 'static>(future: F);
    fn sleep(duration: Duration) -> EnvFuture<'static, ()>;
    fn now() -> DateTime<Utc>;
    #[cfg(debug_assertions)]
    fn log(message: String);
}
