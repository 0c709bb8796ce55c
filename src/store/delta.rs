//! Typed Deltas
//!
//! `state_delta!` generates the partial-update type for a typed state:
//! one `Option` per field, builder setters and the [`Merge`](super::Merge)
//! impl. Invoke it in the module that defines the state struct.

macro_rules! state_delta {
    (
        $(#[$meta:meta])*
        $vis:vis struct $delta:ident for $state:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default)]
        $vis struct $delta {
            $(
                $(#[$field_meta])*
                pub $field: Option<$ty>,
            )*
        }

        impl $delta {
            $(
                #[must_use]
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = Some(value);
                    self
                }
            )*

            /// Whether no field is present
            pub fn is_empty(&self) -> bool {
                true $( && self.$field.is_none() )*
            }

            /// Names of the present fields
            pub fn fields(&self) -> Vec<&'static str> {
                let mut present = Vec::new();
                $(
                    if self.$field.is_some() {
                        present.push(stringify!($field));
                    }
                )*
                present
            }
        }

        impl $crate::store::Merge for $state {
            type Delta = $delta;

            fn merge(&mut self, delta: $delta) {
                ::tracing::trace!(fields = ?delta.fields(), "Merging delta");
                $(
                    if let Some(value) = delta.$field {
                        self.$field = value;
                    }
                )*
            }
        }
    };
}

pub(crate) use state_delta;
