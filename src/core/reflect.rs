//! # Reflector Module / 反射模块
//!
//! Turns a test class into a tag index: for every declared method and every
//! tag on it, one entry is appended under that tag's kind.
//!
//! 将测试类转换为标签索引：对每个已声明方法上的每个标签，在该标签种类下追加一个条目。

use std::collections::HashMap;

use crate::core::class::{Method, TestClass};
use crate::core::tags::{Tag, TagKind};

/// A method paired with the tag value it was indexed under.
/// 与其被索引时所用的标签值配对的方法。
#[derive(Debug)]
pub struct MethodEntry<T> {
    pub method: Method<T>,
    pub tag: Tag,
}

impl<T> Clone for MethodEntry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for MethodEntry<T> {}

impl<T> MethodEntry<T> {
    pub fn name(&self) -> &'static str {
        self.method.name()
    }

    /// The planner's sort key. Hooks never reach the planner; they report
    /// the unprioritized sentinel for completeness.
    pub fn sort_key(&self) -> i32 {
        self.tag
            .as_test()
            .map(|test| test.sort_key())
            .unwrap_or(crate::core::tags::UNPRIORITIZED)
    }
}

/// Mapping from tag kind to the entries indexed under it, in reflector
/// emission order. Immutable once built.
///
/// 从标签种类到其下条目的映射，按反射器产出顺序排列。构建后不可变。
#[derive(Debug)]
pub struct TagIndex<T> {
    entries: HashMap<TagKind, Vec<MethodEntry<T>>>,
}

impl<T: TestClass> TagIndex<T> {
    /// Reflects over `T`'s declared methods.
    #[tracing::instrument(skip_all, fields(class = T::class_name()))]
    pub fn reflect() -> Self {
        let mut entries: HashMap<TagKind, Vec<MethodEntry<T>>> = HashMap::new();

        for declaration in T::declared_methods().iter() {
            for tag in &declaration.tags {
                entries.entry(tag.kind()).or_default().push(MethodEntry {
                    method: declaration.method,
                    tag: *tag,
                });
            }
        }

        let index = Self { entries };
        tracing::debug!(
            before_each = index.count(TagKind::BeforeEach),
            tests = index.count(TagKind::Test),
            after_each = index.count(TagKind::AfterEach),
            "reflected test class"
        );
        index
    }
}

impl<T> TagIndex<T> {
    /// Entries of one kind. Empty when no method carries that tag.
    pub fn get(&self, kind: TagKind) -> &[MethodEntry<T>] {
        self.entries.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count(&self, kind: TagKind) -> usize {
        self.get(kind).len()
    }

    /// The single entry of a hook kind, if present.
    /// 某个钩子种类的唯一条目（如存在）。
    pub fn hook(&self, kind: TagKind) -> Option<&MethodEntry<T>> {
        self.get(kind).first()
    }
}
