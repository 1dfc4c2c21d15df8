/// Implements set algebra and collection traits for a `{ bits: u64 }` set type.
///
/// The type must provide `fn insert(self, elem: $elem) -> Self`.
macro_rules! bitset_traits {
    ($name:ident, $elem:ty) => {
        impl std::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits & rhs.bits,
                }
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits | rhs.bits,
                }
            }
        }

        impl std::ops::Sub for $name {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self {
                    bits: self.bits & !rhs.bits,
                }
            }
        }

        impl std::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.bits &= rhs.bits;
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.bits |= rhs.bits;
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { bits: 0 }
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<T: IntoIterator<Item = $elem>>(iter: T) -> Self {
                let mut set = Self::default();
                set.extend(iter);
                set
            }
        }

        impl Extend<$elem> for $name {
            fn extend<T: IntoIterator<Item = $elem>>(&mut self, iter: T) {
                for elem in iter {
                    *self = self.insert(elem);
                }
            }
        }
    };
}
pub(crate) use bitset_traits;
