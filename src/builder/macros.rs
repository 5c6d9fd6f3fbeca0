//! Macros for ergonomic place declaration.

/// Declare a place enum.
///
/// Derives everything a place needs (plus `Copy` and serde support), and
/// adds an `ALL` list of the variants in declaration order, a `name()`
/// accessor and a `Display` impl. The first variant listed is a natural
/// initial place when passing `ALL` to a machine.
///
/// # Example
///
/// ```
/// use placeflow::place_enum;
///
/// place_enum! {
///     pub enum OrderPlace {
///         Created,
///         Paid,
///         Shipped,
///     }
/// }
///
/// assert_eq!(OrderPlace::ALL, &[OrderPlace::Created, OrderPlace::Paid, OrderPlace::Shipped]);
/// assert_eq!(OrderPlace::Paid.name(), "Paid");
/// assert_eq!(OrderPlace::Shipped.to_string(), "Shipped");
/// ```
#[macro_export]
macro_rules! place_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
