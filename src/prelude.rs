pub(crate) use allocator_api2::alloc::AllocError;
pub(crate) use allocator_api2::alloc::Allocator;
pub(crate) use allocator_api2::alloc::Global;
pub(crate) use allocator_api2::vec::Vec;
pub(crate) use core::alloc::Layout;
pub(crate) use core::fmt;
pub(crate) use crate::List;
pub(crate) use crate::Fail;
pub(crate) use crate::unwrap;
