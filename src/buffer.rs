//! Typed, zero-copy views over untyped byte regions
//!
//! Host code often shares a raw byte region with the device and wants to read
//! or write it as an array of vectors or structs. [`with_typed_view`]
//! reinterprets such a region in place as `len / size_of::<T>()` elements.
//!
//! # Preconditions
//!
//! The region length must be an exact multiple of `size_of::<T>()`, and the
//! region must be aligned for `T`. A violation means the caller paired the
//! wrong region with the wrong element type, so it panics rather than
//! returning an error. Indexing past the element count panics as well.
//!
//! # Aliasing
//!
//! Writes through a view land directly in the region: whoever else reads the
//! region (including the device) sees them. Synchronizing with device-side
//! access is up to the caller.

use bytemuck::{Pod, Zeroable};
use std::any::type_name;
use std::fmt;
use std::mem::size_of;
use std::ops::{Deref, DerefMut};

/// A byte region viewed as a mutable slice of `T`
///
/// Derefs to `[T]`, so it supports indexing, iteration and slice methods.
pub struct TypedView<'a, T> {
    elements: &'a mut [T],
}

impl<'a, T: Pod> TypedView<'a, T> {
    /// Views `region` as elements of `T`
    ///
    /// # Panics
    ///
    /// If `T` is zero-sized, if `region.len()` is not a multiple of
    /// `size_of::<T>()`, or if `region` is not aligned for `T`.
    pub fn new(region: &'a mut [u8]) -> Self {
        let stride = size_of::<T>();
        assert!(
            stride != 0 && region.len() % stride == 0,
            "region of {} bytes is not a multiple of the {}-byte stride of {}",
            region.len(),
            stride,
            type_name::<T>()
        );
        if region.is_empty() {
            return Self {
                elements: Default::default(),
            };
        }
        match bytemuck::try_cast_slice_mut(region) {
            Ok(elements) => Self { elements },
            Err(err) => panic!("region cannot be viewed as {}: {err:?}", type_name::<T>()),
        }
    }

    /// Number of elements in the view
    #[inline]
    pub fn count(&self) -> usize {
        self.elements.len()
    }

    /// The underlying bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&*self.elements)
    }

    /// Unwraps the view into the typed slice it borrows
    #[inline]
    pub fn into_slice(self) -> &'a mut [T] {
        self.elements
    }
}

impl<T> Deref for TypedView<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &*self.elements
    }
}

impl<T> DerefMut for TypedView<'_, T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut *self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// Runs `f` with `region` viewed as elements of `T`
///
/// # Panics
///
/// If `region.len()` is not a multiple of `size_of::<T>()`, or if `region` is
/// not aligned for `T`. An aligned `DataBuffer` satisfies the second condition
/// for every catalog value type. Indexing the view at or past `count()` panics
/// as well.
///
/// # Example
///
/// ```
/// use simdarg::buffer::{DataBuffer, with_typed_view};
/// use simdarg::simd::Float2;
///
/// let mut buffer = DataBuffer::zeroed(32);
/// let count = with_typed_view::<Float2, _>(buffer.bytes_mut(), |mut view| {
///     view[3] = Float2::new([1.0, 2.0]);
///     view.count()
/// });
/// assert_eq!(count, 4);
/// assert_eq!(&buffer.bytes()[24..28], &1.0f32.to_ne_bytes());
/// ```
pub fn with_typed_view<T: Pod, R>(region: &mut [u8], f: impl FnOnce(TypedView<'_, T>) -> R) -> R {
    f(TypedView::new(region))
}

/// Runs `f` with an externally owned region viewed as elements of `T`
///
/// # Safety
///
/// `ptr` must be valid for reads and writes of `len` bytes for the duration of
/// the call, and nothing else may access that memory while `f` runs. Memory
/// shared with the device must not be in use by the device.
///
/// # Panics
///
/// If `len` is not a multiple of `size_of::<T>()`, or if a non-empty `ptr` is
/// not aligned for `T`.
pub unsafe fn with_raw_typed_view<T: Pod, R>(
    ptr: *mut u8,
    len: usize,
    f: impl FnOnce(TypedView<'_, T>) -> R,
) -> R {
    let region: &mut [u8] = if len == 0 {
        &mut []
    } else {
        // SAFETY: the caller guarantees `ptr` is valid and exclusive for `len` bytes.
        unsafe { std::slice::from_raw_parts_mut(ptr, len) }
    };
    with_typed_view(region, f)
}

/// 16 bytes, aligned for the widest catalog value type
#[repr(C, align(16))]
#[derive(Copy, Clone)]
struct Block([u8; 16]);

// SAFETY: a byte array wrapper with size equal to its alignment has no padding.
unsafe impl Zeroable for Block {}
unsafe impl Pod for Block {}

const BLOCK_SIZE: usize = size_of::<Block>();

/// An owned byte region, 16-byte aligned, for data shared with the device
///
/// Built from a slice of values in their natural layout with no extra padding,
/// and accessed as typed elements through [`typed_access`](Self::typed_access).
#[derive(Clone)]
pub struct DataBuffer {
    blocks: Vec<Block>,
    len: usize,
}

impl DataBuffer {
    /// A zero-filled buffer of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        Self {
            blocks: vec![Block([0; BLOCK_SIZE]); len.div_ceil(BLOCK_SIZE)],
            len,
        }
    }

    /// A buffer holding the bytes of `values`
    pub fn from_values<T: Pod>(values: &[T]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(values);
        let mut buffer = Self::zeroed(bytes.len());
        buffer.bytes_mut().copy_from_slice(bytes);
        buffer
    }

    /// Length in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the buffer holds no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The buffer's bytes
    pub fn bytes(&self) -> &[u8] {
        let bytes: &[u8] = bytemuck::cast_slice(self.blocks.as_slice());
        &bytes[..self.len]
    }

    /// The buffer's bytes, mutably
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        let bytes: &mut [u8] = bytemuck::cast_slice_mut(self.blocks.as_mut_slice());
        &mut bytes[..self.len]
    }

    /// Runs `f` with the buffer viewed as elements of `T`
    ///
    /// # Panics
    ///
    /// If the buffer length is not a multiple of `size_of::<T>()`, or `T`
    /// needs more than 16-byte alignment.
    pub fn typed_access<T: Pod, R>(&mut self, f: impl FnOnce(TypedView<'_, T>) -> R) -> R {
        with_typed_view(self.bytes_mut(), f)
    }
}

impl fmt::Debug for DataBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataBuffer").field("len", &self.len).finish()
    }
}
