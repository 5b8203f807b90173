use crate::error::{LogDomainError, Result};
use std::alloc::{Layout, alloc, dealloc};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

/// Cache-line alignment for table storage
pub const CACHE_LINE: usize = 64;

/// Fixed-length, over-aligned buffer whose allocation can fail gracefully.
///
/// Unlike `Vec`, a failed allocation is reported as
/// [`LogDomainError::AllocationFailure`] instead of aborting the process.
pub struct AlignedBuf<T> {
    ptr: NonNull<T>,
    len: usize,
    layout: Layout,
    _marker: PhantomData<T>,
}

// ============================================================================
// Construction requires Copy + Default
// ============================================================================
impl<T: Copy + Default> AlignedBuf<T> {
    /// Allocate `len` default-initialised elements aligned to `align` bytes.
    ///
    /// `align` must be a power of two.
    pub fn try_new(len: usize, align: usize) -> Result<Self> {
        if !align.is_power_of_two() {
            return Err(LogDomainError::InvalidParameter {
                name: "align",
                value: align as f64,
            });
        }
        let elem_size = mem::size_of::<T>();
        let bytes = len.saturating_mul(elem_size);
        let align = align.max(mem::align_of::<T>());

        let layout = Layout::from_size_align(bytes, align)
            .map_err(|_| LogDomainError::AllocationFailure { bytes })?;

        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                len,
                layout,
                _marker: PhantomData,
            });
        }
        let ptr = unsafe {
            let raw = alloc(layout) as *mut T;
            let Some(ptr) = NonNull::new(raw) else {
                return Err(LogDomainError::AllocationFailure { bytes });
            };
            for i in 0..len {
                std::ptr::write(ptr.as_ptr().add(i), T::default());
            }
            ptr
        };

        Ok(Self {
            ptr,
            len,
            layout,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Access works for any T
// ============================================================================
impl<T> AlignedBuf<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn alignment(&self) -> usize {
        self.layout.align()
    }

    /// Bytes held by the allocation
    #[inline]
    pub fn bytes(&self) -> usize {
        self.layout.size()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}

impl<T> Drop for AlignedBuf<T> {
    fn drop(&mut self) {
        if self.layout.size() > 0 {
            unsafe {
                if mem::needs_drop::<T>() {
                    for i in 0..self.len {
                        std::ptr::drop_in_place(self.ptr.as_ptr().add(i));
                    }
                }
                dealloc(self.ptr.as_ptr() as *mut u8, self.layout);
            }
        }
    }
}

impl<T> std::ops::Index<usize> for AlignedBuf<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.as_slice()[i]
    }
}

impl<T> std::ops::IndexMut<usize> for AlignedBuf<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.as_mut_slice()[i]
    }
}

// The buffer owns its elements exclusively
unsafe impl<T: Send> Send for AlignedBuf<T> {}
unsafe impl<T: Sync> Sync for AlignedBuf<T> {}

impl<T> std::fmt::Debug for AlignedBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlignedBuf")
            .field("len", &self.len)
            .field("align", &self.layout.align())
            .finish_non_exhaustive()
    }
}
