//! # Test Class Module / 测试类模块
//!
//! Rust has no runtime reflection, so a test class describes itself: it names
//! itself, knows how to build a fresh fixture, and lists its declared methods
//! together with their tags.
//!
//! Rust 没有运行时反射，因此测试类需要自我描述：提供类名、构造新的夹具实例的方法，
//! 以及带有标签的已声明方法列表。

use anyhow::Result;
use std::fmt;

use crate::core::tags::{Tag, TestTag};

/// Signature of every declared method: it runs against one fixture instance.
pub type MethodFn<T> = fn(&mut T) -> Result<()>;

/// A user-written class whose methods carry runner tags.
/// 用户编写的、其方法带有运行器标签的类。
///
/// ```
/// use fixture_runner::{Methods, TestClass, assertions::assert_equals_i32};
///
/// #[derive(Default)]
/// struct Counter {
///     value: i32,
/// }
///
/// impl Counter {
///     fn bump(&mut self) -> anyhow::Result<()> {
///         self.value += 1;
///         Ok(())
///     }
///
///     fn test_starts_at_one(&mut self) -> anyhow::Result<()> {
///         assert_equals_i32(1, self.value)?;
///         Ok(())
///     }
/// }
///
/// impl TestClass for Counter {
///     fn class_name() -> &'static str {
///         "Counter"
///     }
///
///     fn construct() -> anyhow::Result<Self> {
///         Ok(Self::default())
///     }
///
///     fn declared_methods() -> Methods<Self> {
///         Methods::new()
///             .before_each("bump", Self::bump)
///             .test_with_priority("test_starts_at_one", 1, Self::test_starts_at_one)
///     }
/// }
/// ```
pub trait TestClass: Sized + 'static {
    /// Simple name of the class, printed as the report header.
    fn class_name() -> &'static str;

    /// The zero-argument constructor. Called once per test.
    /// 零参数构造函数。每个测试调用一次。
    fn construct() -> Result<Self>;

    /// The declared methods, in declaration order.
    /// 按声明顺序排列的已声明方法。
    fn declared_methods() -> Methods<Self>;
}

/// A method handle: the method's simple name and the function to invoke.
/// 方法句柄：方法的简单名称和要调用的函数。
pub struct Method<T> {
    name: &'static str,
    func: MethodFn<T>,
}

impl<T> Method<T> {
    pub fn new(name: &'static str, func: MethodFn<T>) -> Self {
        Self { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invokes the method on `instance`.
    pub fn invoke(&self, instance: &mut T) -> Result<()> {
        (self.func)(instance)
    }
}

// Manual impls: `fn(&mut T)` is always `Copy`, but a derive would demand `T: Clone`.
impl<T> Clone for Method<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Method<T> {}

impl<T> fmt::Debug for Method<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// One declared method with every tag attached to it (possibly none).
#[derive(Debug, Clone)]
pub struct Declaration<T> {
    pub method: Method<T>,
    pub tags: Vec<Tag>,
}

/// Builder for the declared-method table of a [`TestClass`].
/// [`TestClass`] 已声明方法表的构建器。
#[derive(Debug, Clone)]
pub struct Methods<T> {
    declared: Vec<Declaration<T>>,
}

impl<T> Default for Methods<T> {
    fn default() -> Self {
        Self {
            declared: Vec::new(),
        }
    }
}

impl<T> Methods<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a method with an arbitrary set of tags.
    /// A method bearing several tags is indexed once per tag.
    ///
    /// 声明一个带有任意标签集合的方法。带多个标签的方法会按每个标签各索引一次。
    pub fn tagged(
        mut self,
        name: &'static str,
        func: MethodFn<T>,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        self.declared.push(Declaration {
            method: Method::new(name, func),
            tags: tags.into_iter().collect(),
        });
        self
    }

    pub fn before_each(self, name: &'static str, func: MethodFn<T>) -> Self {
        self.tagged(name, func, [Tag::BeforeEach])
    }

    pub fn after_each(self, name: &'static str, func: MethodFn<T>) -> Self {
        self.tagged(name, func, [Tag::AfterEach])
    }

    /// Declares a test without a priority. It runs after every prioritized test.
    pub fn test(self, name: &'static str, func: MethodFn<T>) -> Self {
        self.tagged(name, func, [Tag::Test(TestTag::default())])
    }

    /// Declares a test with a priority. Values outside `[1, 10]` are treated as unprioritized.
    pub fn test_with_priority(self, name: &'static str, priority: i32, func: MethodFn<T>) -> Self {
        self.tagged(name, func, [Tag::Test(TestTag::with_priority(priority))])
    }

    /// Declares a helper method with no tags. The reflector ignores it.
    pub fn untagged(self, name: &'static str, func: MethodFn<T>) -> Self {
        self.tagged(name, func, [])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Declaration<T>> {
        self.declared.iter()
    }

    pub fn len(&self) -> usize {
        self.declared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declared.is_empty()
    }
}
