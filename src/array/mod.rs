//! Contiguous containers and their index cursors.
//!
//! [`StaticArray`] has a capacity fixed at compile time and refuses to grow
//! past it. [`DynamicArray`] grows its buffer following a [`GrowthPolicy`].
//! Both implement every capability trait and hand out [`IndexCursor`]s,
//! which support constant-time random seeking.

pub mod cursor;
mod dynamic_array;
mod static_array;

pub use cursor::{IndexCursor, IndexCursorMut};
pub use dynamic_array::{DynamicArray, GrowthPolicy};
pub use static_array::StaticArray;

/// Operations shared by the array containers.
///
/// The container must have an `items: Vec<T>`, a `generation: u64` and an
/// `id: OwnerId` field, plus a `make_room(&mut self) -> Result<()>` method ensuring one
/// more element fits, and a `limit(&self) -> Option<usize>` method.
macro_rules! impl_array {
    ([$($GEN:tt)*] $ARRAY:ty) => {
        impl<$($GEN)*> $ARRAY {
            fn touch(&mut self) {
                self.generation = self.generation.wrapping_add(1);
            }

            /// Returns the number of elements.
            #[inline]
            pub fn len(&self) -> usize {
                self.items.len()
            }

            #[inline]
            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            /// Structural modifications made so far, see
            /// [`Bookmark`](crate::cursor::Bookmark).
            pub fn generation(&self) -> u64 {
                self.generation
            }

            /// Identity of this array, see [`OwnerId`].
            pub fn owner_id(&self) -> OwnerId {
                self.id
            }

            pub fn as_slice(&self) -> &[T] {
                &self.items
            }

            pub fn as_mut_slice(&mut self) -> &mut [T] {
                &mut self.items
            }

            pub fn iter(&self) -> std::slice::Iter<'_, T> {
                self.items.iter()
            }

            pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
                self.items.iter_mut()
            }

            pub fn get(&self, index: usize) -> Option<&T> {
                self.items.get(index)
            }

            pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                self.items.get_mut(index)
            }

            pub fn front(&self) -> Option<&T> {
                self.items.first()
            }

            pub fn back(&self) -> Option<&T> {
                self.items.last()
            }

            /// Overwrite the element at `index`, returning the previous one.
            ///
            /// This is not a structural modification: outstanding bookmarks
            /// stay valid.
            pub fn set(&mut self, index: usize, value: T) -> Result<T> {
                let len = self.len();
                let slot = self
                    .items
                    .get_mut(index)
                    .ok_or_else(|| Error::out_of_range(index, len))?;
                Ok(std::mem::replace(slot, value))
            }

            /// Insert `value` at position `index`, shifting the following
            /// elements one step towards the back.
            ///
            /// # Complexity
            ///
            /// This operation should compute in *O*(*n* - `index`) time.
            pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
                if index > self.len() {
                    return Err(Error::out_of_range(index, self.len()));
                }
                self.make_room()?;
                self.items.insert(index, value);
                self.touch();
                Ok(())
            }

            /// Remove and return the element at `index`, shifting the
            /// following elements one step towards the front.
            pub fn remove(&mut self, index: usize) -> Result<T> {
                if index >= self.len() {
                    return Err(Error::out_of_range(index, self.len()));
                }
                self.touch();
                Ok(self.items.remove(index))
            }

            pub fn push_back(&mut self, value: T) -> Result<()> {
                self.make_room()?;
                self.items.push(value);
                self.touch();
                Ok(())
            }

            /// # Complexity
            ///
            /// This operation should compute in *O*(*n*) time.
            pub fn push_front(&mut self, value: T) -> Result<()> {
                self.insert(0, value)
            }

            pub fn pop_back(&mut self) -> Option<T> {
                let value = self.items.pop()?;
                self.touch();
                Some(value)
            }

            pub fn pop_front(&mut self) -> Option<T> {
                self.remove(0).ok()
            }

            /// Removes all elements.
            pub fn clear(&mut self) {
                self.items.clear();
                self.touch();
            }

            /// Remove all elements and return them in order.
            pub fn take_all(&mut self) -> Vec<T> {
                self.touch();
                std::mem::take(&mut self.items)
            }

            pub fn contains(&self, value: &T) -> bool
            where
                T: PartialEq,
            {
                self.items.contains(value)
            }

            /// Provides a cursor at position `at`; `at == len` is the end.
            pub fn cursor(&self, at: usize) -> Result<IndexCursor<'_, T>> {
                if at > self.len() {
                    return Err(Error::out_of_range(at, self.len()));
                }
                Ok(IndexCursor::new(&self.items, at, self.generation, self.id))
            }

            /// Provides a cursor at the position recorded by `bookmark`.
            ///
            /// # Errors
            ///
            /// [`Error::StaleCursor`] if the array was structurally modified
            /// since the bookmark was taken, [`Error::Unsupported`] if the
            /// bookmark belongs to another container.
            pub fn restore(&self, bookmark: &Bookmark) -> Result<IndexCursor<'_, T>> {
                let index = bookmark.resolve(self.id, self.generation, self.len())?;
                Ok(IndexCursor::new(&self.items, index, self.generation, self.id))
            }

            /// Like [`restore`](Self::restore), but the cursor is writable.
            pub fn restore_mut(&mut self, bookmark: &Bookmark) -> Result<IndexCursorMut<'_, T>> {
                let index = bookmark.resolve(self.id, self.generation, self.len())?;
                let (generation, id) = (self.generation, self.id);
                Ok(IndexCursorMut::new(&mut self.items, index, generation, id))
            }
        }

        impl<$($GEN)*> Basic for $ARRAY {
            type Item = T;

            fn len(&self) -> usize {
                self.items.len()
            }

            fn capacity(&self) -> Option<usize> {
                self.limit()
            }

            fn clear(&mut self) {
                <$ARRAY>::clear(self)
            }

            fn take_all(&mut self) -> Vec<T> {
                <$ARRAY>::take_all(self)
            }
        }

        impl<$($GEN)*> RandomAccess for $ARRAY {
            fn get(&self, index: usize) -> Option<&T> {
                self.items.get(index)
            }

            fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                self.items.get_mut(index)
            }

            fn set(&mut self, index: usize, value: T) -> Result<T> {
                <$ARRAY>::set(self, index, value)
            }

            fn insert(&mut self, index: usize, value: T) -> Result<()> {
                <$ARRAY>::insert(self, index, value)
            }

            fn remove(&mut self, index: usize) -> Result<T> {
                <$ARRAY>::remove(self, index)
            }
        }

        impl<$($GEN)*> Linear for $ARRAY {
            fn push_front(&mut self, value: T) -> Result<()> {
                <$ARRAY>::push_front(self, value)
            }

            fn push_back(&mut self, value: T) -> Result<()> {
                <$ARRAY>::push_back(self, value)
            }

            fn pop_front(&mut self) -> Option<T> {
                <$ARRAY>::pop_front(self)
            }

            fn pop_back(&mut self) -> Option<T> {
                <$ARRAY>::pop_back(self)
            }

            fn peek_front(&self) -> Option<&T> {
                self.items.first()
            }

            fn peek_back(&self) -> Option<&T> {
                self.items.last()
            }
        }

        impl<$($GEN)*> Traverse for $ARRAY {
            type Cursor<'a> = IndexCursor<'a, T> where Self: 'a;

            fn range(&self) -> (IndexCursor<'_, T>, IndexCursor<'_, T>) {
                (
                    IndexCursor::new(&self.items, 0, self.generation, self.id),
                    IndexCursor::new(&self.items, self.items.len(), self.generation, self.id),
                )
            }
        }

        impl<$($GEN)*> TraverseMut for $ARRAY
        where
            T: Clone,
        {
            type CursorMut<'a> = IndexCursorMut<'a, T> where Self: 'a;

            fn range_mut(&mut self) -> (IndexCursorMut<'_, T>, IndexCursorMut<'_, T>) {
                let (len, generation, id) = (self.items.len(), self.generation, self.id);
                let begin = IndexCursorMut::new(&mut self.items, 0, generation, id);
                let mut end = begin.clone();
                end.seek_forward(len);
                (begin, end)
            }
        }

        impl<$($GEN)*> std::fmt::Debug for $ARRAY
        where
            T: std::fmt::Debug,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_list().entries(self.items.iter()).finish()
            }
        }

        impl<$($GEN)*> PartialEq for $ARRAY
        where
            T: PartialEq,
        {
            fn eq(&self, other: &Self) -> bool {
                self.items == other.items
            }
        }

        impl<$($GEN)*> Eq for $ARRAY where T: Eq {}

        impl<'i, $($GEN)*> IntoIterator for &'i $ARRAY {
            type Item = &'i T;
            type IntoIter = std::slice::Iter<'i, T>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.iter()
            }
        }

        impl<$($GEN)*> IntoIterator for $ARRAY {
            type Item = T;
            type IntoIter = std::vec::IntoIter<T>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.into_iter()
            }
        }
    };
}

pub(crate) use impl_array;
