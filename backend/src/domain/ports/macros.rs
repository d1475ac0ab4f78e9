//! `define_port_error!`: thiserror enums plus snake_case constructors whose
//! fields accept anything `Into` the declared type.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum KennelPortError {
            Offline => "kennel store offline",
            Query { message: String } => "kennel query failed: {message}",
            Full { capacity: u32 } => "kennel full at {capacity}",
            Duplicate { name: String, attempts: u32 } => "{name} already booked ({attempts})",
        }
    }

    #[test]
    fn unit_variants_get_snake_case_constructors() {
        assert_eq!(KennelPortError::offline(), KennelPortError::Offline);
    }

    #[test]
    fn string_fields_accept_str() {
        let err = KennelPortError::query("timeout");
        assert_eq!(err.to_string(), "kennel query failed: timeout");
    }

    #[test]
    fn non_string_fields_keep_their_type() {
        assert_eq!(KennelPortError::full(12_u32).to_string(), "kennel full at 12");
    }

    #[test]
    fn mixed_fields_render_in_order() {
        let err = KennelPortError::duplicate("Rex", 2_u32);
        assert_eq!(err.to_string(), "Rex already booked (2)");
    }
}
