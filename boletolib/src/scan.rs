//! Граница со сканером: явный результат обнаружения и подавление повторов.
//!
//! Сканер шлёт кандидатов с частотой кадров, поэтому один и тот же код
//! приходит много раз подряд. Подавление дублей — забота вызывающего,
//! а не кодека; здесь лежит готовое для этого состояние.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Результат одного события обнаружения от сканера.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    /// Кадр без распознанного символа.
    NoDetection,
    /// Распознанная строка; длину и состав кодек проверяет сам.
    Detected(String),
}

impl Detection {
    pub fn value(&self) -> Option<&str> {
        match self {
            Detection::NoDetection => None,
            Detection::Detected(s) => Some(s),
        }
    }
}

/// Ограниченный буфер недавно принятых значений с окном подавления.
#[derive(Debug)]
pub struct ScanFilter {
    capacity: usize,
    window: Duration,
    seen: VecDeque<(String, Instant)>,
}

impl ScanFilter {
    pub fn new(capacity: usize, window: Duration) -> Self {
        Self {
            capacity,
            window,
            seen: VecDeque::with_capacity(capacity),
        }
    }

    /// `true`, если значение новое в пределах окна; тогда оно запоминается.
    pub fn accept(&mut self, value: &str) -> bool {
        let now = Instant::now();
        self.seen
            .retain(|(_, at)| now.duration_since(*at) < self.window);
        if self.seen.iter().any(|(v, _)| v == value) {
            return false;
        }
        if self.seen.len() == self.capacity {
            self.seen.pop_front();
        }
        self.seen.push_back((value.to_string(), now));
        true
    }
}
