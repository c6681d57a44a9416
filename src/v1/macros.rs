/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

// Generates the `_with_callback` and `_with_state` forms of an async operation. The callback is
// checked before anything is sent and receives the result exactly once on a runtime worker.
macro_rules! callback_operations {
    ( $(
        $with_callback:ident, $with_state:ident
            ( $( $arg:ident : $ty:ty ),* ) -> $status:ty, $payload:ty
            = | $client:ident | $call:expr ;
    )* ) => {
        $(
            pub fn $with_callback<F>(
                &self,
                $( $arg: $ty, )*
                callback: Option<F>,
            ) -> Result<tokio::task::JoinHandle<()>, BoxError>
            where
                F: FnOnce(Result<Response<$status, $payload>, BoxError>) + Send + 'static,
            {
                self.$with_state($( $arg, )* callback, ())
            }

            pub fn $with_state<C, F>(
                &self,
                $( $arg: $ty, )*
                callback: Option<F>,
                user_state: C,
            ) -> Result<tokio::task::JoinHandle<()>, BoxError>
            where
                C: Send + 'static,
                F: FnOnce(Result<Response<$status, $payload, C>, BoxError>) + Send + 'static,
            {
                let callback = callback.ok_or(BoxError::MissingCallback(stringify!($with_state)))?;
                let $client = self.clone();
                Ok(self.spawn(async move {
                    let result = $call.await;
                    callback(result.map(|r| r.with_user_state(user_state)));
                }))
            }
        )*
    };
}

// Generates blocking wrappers that drive the matching async operation to completion
macro_rules! blocking_operations {
    ( $(
        $(#[$meta:meta])*
        $op:ident ( $( $arg:ident : $ty:ty ),* ) -> $resp:ty ;
    )* ) => {
        $(
            $(#[$meta])*
            pub fn $op(&self, $( $arg: $ty ),* ) -> Result<$resp, BoxError> {
                self.runtime.block_on(self.client.$op($( $arg ),*))
            }
        )*
    };
}

pub(crate) use {blocking_operations, callback_operations};
