/// Implements `From` for coordinate list geometries, accepting anything whose items
/// convert into [`Coordinates`](crate::Coordinates).
#[macro_export]
macro_rules! impl_from_coordinate_list {
	($($t:ty),*) => {$(
		impl<T> From<Vec<T>> for $t
		where
			$crate::Coordinates: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map($crate::Coordinates::from).collect())
			}
		}

		impl<'a, T> From<&'a [T]> for $t
		where
			$crate::Coordinates: From<&'a T>,
		{
			fn from(value: &'a [T]) -> Self {
				Self(value.iter().map($crate::Coordinates::from).collect())
			}
		}

		impl<'a, T, const N: usize> From<&'a [T; N]> for $t
		where
			$crate::Coordinates: From<&'a T>,
		{
			fn from(value: &'a [T; N]) -> Self {
				Self(value.iter().map($crate::Coordinates::from).collect())
			}
		}
	)*}
}
