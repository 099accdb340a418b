//! Macros for reducing boilerplate when defining entity vocabularies
//!
//! Each status domain is a closed enumeration whose variants serialize to,
//! display as, and parse from a fixed label.

/// Define a closed enumeration with one label per variant
///
/// Generates the enum (with serde renames), plus `ClosedEnum`, `Display`
/// and `FromStr` implementations.
///
/// # Example
///
/// ```rust,ignore
/// closed_enum! {
///     /// Review state of a store listing
///     pub enum StoreStatus: "store status" {
///         Draft => "작성중",
///         UnderReview => "심사중",
///     }
/// }
///
/// assert_eq!(StoreStatus::Draft.to_string(), "작성중");
/// assert_eq!("심사중".parse::<StoreStatus>(), Ok(StoreStatus::UnderReview));
/// ```
#[macro_export]
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::core::entity::ClosedEnum for $name {
            const KIND: &'static str = $kind;

            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::entity::ClosedEnum::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::error::ParseLabelError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <$name as $crate::core::entity::ClosedEnum>::from_label(s).ok_or_else(|| {
                    $crate::core::error::ParseLabelError {
                        kind: $kind,
                        value: s.to_string(),
                    }
                })
            }
        }
    };
}

/// Implement `Entity` for a struct with `id: String` and a `status` field
///
/// # Example
///
/// ```rust,ignore
/// impl_entity!(Coupon, CouponStatus, "coupon", "coupons");
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $status:ty, $singular:literal, $plural:literal) => {
        impl $crate::core::entity::Entity for $type {
            type Status = $status;

            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn status(&self) -> $status {
                self.status
            }
        }
    };
}
