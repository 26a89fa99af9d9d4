/// Declares an explicitly numbered DXIL enumeration.
///
/// Every variant must carry a literal discriminant: the numbers are the
/// serialized encoding, so nothing is left to auto-assignment. The generated
/// type gets `ALL`, `from_raw`/`raw`, `name`/`from_name`, `TryFrom<repr>`,
/// `Display`, `FromStr` and a [`crate::DxilEnum`] impl.
macro_rules! dxil_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $repr:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every tag, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Decodes a raw encoded value, returning `None` for numbers that
            /// have no tag.
            pub const fn from_raw(value: $repr) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// The encoded value of this tag.
            pub const fn raw(self) -> $repr {
                self as $repr
            }

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant),)+
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($variant) => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::core::convert::TryFrom<$repr> for $name {
            type Error = $crate::DxilError;

            fn try_from(value: $repr) -> ::core::result::Result<Self, Self::Error> {
                Self::from_raw(value).ok_or($crate::DxilError::UnknownValue {
                    kind: stringify!($name),
                    value: u32::from(value),
                })
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::DxilError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Self::from_name(s).ok_or_else(|| $crate::DxilError::UnknownName {
                    kind: stringify!($name),
                    name: s.to_string(),
                })
            }
        }

        impl $crate::DxilEnum for $name {
            const KIND: &'static str = stringify!($name);

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn name(self) -> &'static str {
                $name::name(self)
            }

            fn value(self) -> u32 {
                u32::from(self.raw())
            }
        }
    };
}

pub(crate) use dxil_enum;
