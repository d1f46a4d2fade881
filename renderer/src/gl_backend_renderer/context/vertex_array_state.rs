use super::super::gl;
use super::{DataType, GlDriver, VertexArrayDriver, VertexAttrib};
use log::{trace, warn};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Id of the array last bound through a state, shared with every handle
/// that state created so a deleted array never stays recorded as bound.
type BoundArray = Rc<Cell<Option<gl::GLuint>>>;

/// An owned vertex array object.
///
/// The GPU object is released when the handle is dropped, so every id
/// handed out by [`VertexArrayState::create`] is deleted exactly once.
pub struct VertexArray<D: VertexArrayDriver = GlDriver> {
    handle: gl::GLuint,
    driver: D,
    bound: BoundArray,
}

impl<D: VertexArrayDriver> VertexArray<D> {
    /// Takes ownership of an id previously returned by [`VertexArray::into_raw`]
    /// or generated directly through the driver of `state`.
    ///
    /// # Safety
    ///
    /// `handle` must name a live vertex array of the driver's context and
    /// must not be owned by any other `VertexArray`.
    pub unsafe fn from_raw(state: &VertexArrayState<D>, handle: gl::GLuint) -> Self {
        Self {
            handle,
            driver: state.driver.clone(),
            bound: Rc::clone(&state.current_bound_array),
        }
    }

    #[inline]
    pub fn id(&self) -> gl::GLuint {
        self.handle
    }

    /// Releases the GPU object now instead of at the end of scope.
    pub fn destroy(self) {}

    /// Gives up ownership. The caller is now responsible for deleting the id.
    pub fn into_raw(mut self) -> gl::GLuint {
        std::mem::replace(&mut self.handle, 0)
    }
}

impl<D: VertexArrayDriver> Drop for VertexArray<D> {
    fn drop(&mut self) {
        // Zero is never a generated name.
        if self.handle != 0 {
            trace!("deleting vertex array {}", self.handle);
            self.driver.delete_vertex_array(self.handle);

            // The driver falls back to array 0 when the bound array is deleted.
            if self.bound.get() == Some(self.handle) {
                self.bound.set(None);
            }
        }
    }
}

impl<D: VertexArrayDriver> fmt::Debug for VertexArray<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<GLVertexArray@{}>", self.handle)
    }
}

/// Arguments of one `glVertexAttribPointer` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttribPointer {
    pub index: gl::GLuint,
    pub size: gl::GLint,
    pub type_: gl::GLenum,
    pub normalized: gl::GLboolean,
    /// Byte distance between two consecutive vertices.
    pub stride: gl::GLsizei,
    /// Byte offset of the attribute inside the bound buffer.
    pub offset: usize,
}

impl AttribPointer {
    /// `attrib_size` is the number of components of the attribute,
    /// `vertex_size` the number of `data_type` components in a whole vertex.
    /// A stride that does not fit a `GLsizei` wraps and is left for the
    /// driver to reject.
    pub fn new(
        index: VertexAttrib,
        data_type: DataType,
        attrib_size: i32,
        vertex_size: i32,
        offset: usize,
    ) -> Self {
        Self {
            index: index.index(),
            size: attrib_size,
            type_: data_type.gl_enum(),
            normalized: gl::FALSE,
            stride: (data_type.size_of() as gl::GLsizei).wrapping_mul(vertex_size),
            offset,
        }
    }
}

pub struct VertexArrayState<D: VertexArrayDriver = GlDriver> {
    driver: D,
    current_bound_array: BoundArray,
}

impl VertexArrayState<GlDriver> {
    pub fn build_initialized() -> Self {
        Self::with_driver(GlDriver::new())
    }
}

impl<D: VertexArrayDriver> VertexArrayState<D> {
    pub fn with_driver(driver: D) -> Self {
        Self {
            driver,
            current_bound_array: Rc::new(Cell::new(None)),
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Id of the vertex array last bound through this state, if any.
    pub fn current(&self) -> Option<gl::GLuint> {
        self.current_bound_array.get()
    }

    pub fn create(&self) -> VertexArray<D> {
        let handle = self.driver.gen_vertex_array();
        trace!("created vertex array {}", handle);

        VertexArray {
            handle,
            driver: self.driver.clone(),
            bound: Rc::clone(&self.current_bound_array),
        }
    }

    pub fn destroy(&mut self, array: VertexArray<D>) {
        array.destroy();
    }

    pub fn bind(&mut self, array: &VertexArray<D>) -> &mut Self {
        trace!("binding vertex array {}", array.id());
        self.current_bound_array.set(Some(array.id()));
        self.driver.bind_vertex_array(array.id());

        self
    }

    pub fn unbind(&mut self) -> &mut Self {
        self.current_bound_array.set(None);
        self.driver.bind_vertex_array(0);

        self
    }

    pub fn enable(&mut self, index: VertexAttrib) -> &mut Self {
        self.warn_if_unbound("enable", index);
        self.driver.enable_vertex_attrib_array(index.index());

        self
    }

    pub fn disable(&mut self, index: VertexAttrib) -> &mut Self {
        self.warn_if_unbound("disable", index);
        self.driver.disable_vertex_attrib_array(index.index());

        self
    }

    /// Describes how `index` is read from the currently bound array buffer.
    ///
    /// The byte stride is `data_type.size_of() * vertex_size`; values are
    /// never normalized.
    pub fn pointer(
        &mut self,
        index: VertexAttrib,
        data_type: DataType,
        attrib_size: i32,
        vertex_size: i32,
        offset: usize,
    ) -> AttribPointer {
        self.warn_if_unbound("pointer", index);

        let attrib = AttribPointer::new(index, data_type, attrib_size, vertex_size, offset);
        trace!("{:?}", attrib);

        self.driver.vertex_attrib_pointer(
            attrib.index,
            attrib.size,
            attrib.type_,
            attrib.normalized,
            attrib.stride,
            attrib.offset,
        );

        attrib
    }

    fn warn_if_unbound(&self, operation: &str, index: VertexAttrib) {
        if self.current_bound_array.get().is_none() {
            warn!(
                "{} on {:?} with no vertex array bound through this state",
                operation, index
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Gen(gl::GLuint),
        Delete(gl::GLuint),
        Bind(gl::GLuint),
        Enable(gl::GLuint),
        Disable(gl::GLuint),
        Pointer(AttribPointer),
    }

    #[derive(Clone, Default)]
    struct RecordingDriver {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RecordingDriver {
        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn push(&self, call: Call) {
            self.calls.borrow_mut().push(call);
        }
    }

    impl VertexArrayDriver for RecordingDriver {
        fn gen_vertex_array(&self) -> gl::GLuint {
            let id = self
                .calls
                .borrow()
                .iter()
                .filter(|call| matches!(call, Call::Gen(_)))
                .count() as gl::GLuint
                + 1;
            self.push(Call::Gen(id));
            id
        }

        fn delete_vertex_array(&self, array: gl::GLuint) {
            self.push(Call::Delete(array));
        }

        fn bind_vertex_array(&self, array: gl::GLuint) {
            self.push(Call::Bind(array));
        }

        fn enable_vertex_attrib_array(&self, index: gl::GLuint) {
            self.push(Call::Enable(index));
        }

        fn disable_vertex_attrib_array(&self, index: gl::GLuint) {
            self.push(Call::Disable(index));
        }

        fn vertex_attrib_pointer(
            &self,
            index: gl::GLuint,
            size: gl::GLint,
            type_: gl::GLenum,
            normalized: gl::GLboolean,
            stride: gl::GLsizei,
            offset: usize,
        ) {
            self.push(Call::Pointer(AttribPointer {
                index,
                size,
                type_,
                normalized,
                stride,
                offset,
            }));
        }

        fn is_vertex_array(&self, _array: gl::GLuint) -> bool {
            false
        }

        fn is_attrib_enabled(&self, _index: gl::GLuint) -> bool {
            false
        }
    }

    #[test]
    fn stride_is_component_size_times_vertex_size() {
        for data_type in DataType::ALL.iter().copied() {
            for vertex_size in 1..=16 {
                let attrib =
                    AttribPointer::new(VertexAttrib::Normal, data_type, 1, vertex_size, 0);
                assert_eq!(
                    attrib.stride as usize,
                    data_type.size_of() * vertex_size as usize,
                    "{:?} x {}",
                    data_type,
                    vertex_size
                );
            }
        }
    }

    #[test]
    fn pointer_forwards_computed_arguments() {
        let driver = RecordingDriver::default();
        let mut state = VertexArrayState::with_driver(driver.clone());

        let vao = state.create();
        state.bind(&vao);
        let issued = state.pointer(VertexAttrib::TexCoord, DataType::Float, 2, 8, 24);

        assert_eq!(
            issued,
            AttribPointer {
                index: 2,
                size: 2,
                type_: gl::FLOAT,
                normalized: gl::FALSE,
                stride: 32,
                offset: 24,
            }
        );
        assert_eq!(driver.calls().last(), Some(&Call::Pointer(issued)));
    }

    #[test]
    fn calls_pass_through_without_a_bound_array() {
        let driver = RecordingDriver::default();
        let mut state = VertexArrayState::with_driver(driver.clone());

        state.enable(VertexAttrib::Color).disable(VertexAttrib::Color);
        state.pointer(VertexAttrib::Color, DataType::UnsignedByte, 4, 4, 0);

        assert_eq!(state.current(), None);
        assert_eq!(driver.calls().len(), 3);
        assert_eq!(driver.calls()[0], Call::Enable(3));
        assert_eq!(driver.calls()[1], Call::Disable(3));
    }

    #[test]
    fn tracks_the_bound_array() {
        let driver = RecordingDriver::default();
        let mut state = VertexArrayState::with_driver(driver.clone());

        let first = state.create();
        let second = state.create();
        state.bind(&first);
        assert_eq!(state.current(), Some(first.id()));

        state.destroy(second);
        assert_eq!(state.current(), Some(first.id()));

        let id = first.id();
        state.destroy(first);
        assert_eq!(state.current(), None);
        assert_eq!(driver.calls().last(), Some(&Call::Delete(id)));
    }

    #[test]
    fn dropping_the_bound_handle_clears_the_binding() {
        let driver = RecordingDriver::default();
        let mut state = VertexArrayState::with_driver(driver.clone());

        let kept = state.create();
        let vao = state.create();
        state.bind(&vao);
        drop(vao);
        assert_eq!(state.current(), None);

        state.bind(&kept);
        state.create().destroy();
        assert_eq!(state.current(), Some(kept.id()));
    }

    #[test]
    fn adopted_handles_share_the_binding() {
        let driver = RecordingDriver::default();
        let mut state = VertexArrayState::with_driver(driver.clone());

        let id = state.create().into_raw();
        let vao = unsafe { VertexArray::from_raw(&state, id) };
        state.bind(&vao);
        vao.destroy();

        assert_eq!(state.current(), None);
    }

    #[test]
    fn oversized_strides_wrap_instead_of_panicking() {
        let attrib = AttribPointer::new(
            VertexAttrib::Weights,
            DataType::Double,
            4,
            gl::GLsizei::MAX,
            0,
        );
        assert_eq!(attrib.stride, 8i32.wrapping_mul(gl::GLsizei::MAX));
    }

    #[test]
    fn unbind_binds_zero() {
        let driver = RecordingDriver::default();
        let mut state = VertexArrayState::with_driver(driver.clone());

        let vao = state.create();
        state.bind(&vao).unbind();

        assert_eq!(state.current(), None);
        assert_eq!(driver.calls().last(), Some(&Call::Bind(0)));
    }

    #[test]
    fn dropping_the_handle_deletes_it_once() {
        let driver = RecordingDriver::default();
        let state = VertexArrayState::with_driver(driver.clone());

        {
            let _vao = state.create();
        }

        let deletes = driver
            .calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Delete(_)))
            .count();
        assert_eq!(deletes, 1);
    }

    #[test]
    fn into_raw_releases_ownership() {
        let driver = RecordingDriver::default();
        let state = VertexArrayState::with_driver(driver.clone());

        let id = state.create().into_raw();
        assert_eq!(driver.calls(), vec![Call::Gen(id)]);

        let vao = unsafe { VertexArray::from_raw(&state, id) };
        assert_eq!(format!("{:?}", vao), format!("<GLVertexArray@{}>", id));
        drop(vao);
        assert_eq!(driver.calls().last(), Some(&Call::Delete(id)));
    }
}
