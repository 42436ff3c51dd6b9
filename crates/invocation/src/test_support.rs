//! In-memory host and target used by unit tests.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tessera_primitives::{ResumableHandle, Value};

use crate::host::{Activation, ActionTarget, ConditionSource, Diagnostic, DiagnosticSink, Environment, Member, PersistenceSink, Scheduler};
use crate::signature::{BoundArguments, CallResult, CallableSignature};

type Body = Box<dyn FnMut(&mut HashMap<String, Value>, &[Value]) -> Result<CallResult, String>>;

struct Method {
	signature: CallableSignature,
	body: Body,
}

pub(crate) struct FakeTarget {
	members: Rc<[Member]>,
	pub fields: HashMap<String, Value>,
	pub conditions: HashMap<String, bool>,
	methods: HashMap<String, Method>,
	pub calls: Vec<(String, Vec<Value>)>,
}

impl FakeTarget {
	pub fn new(members: impl IntoIterator<Item = Member>) -> Self {
		Self {
			members: members.into_iter().collect(),
			fields: HashMap::new(),
			conditions: HashMap::new(),
			methods: HashMap::new(),
			calls: Vec::new(),
		}
	}

	pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
		self.fields.insert(name.to_string(), value.into());
		self
	}

	pub fn condition(mut self, name: &str, value: bool) -> Self {
		self.conditions.insert(name.to_string(), value);
		self
	}

	pub fn method(
		mut self,
		name: &str,
		signature: CallableSignature,
		body: impl FnMut(&mut HashMap<String, Value>, &[Value]) -> Result<CallResult, String> + 'static,
	) -> Self {
		self.methods.insert(name.to_string(), Method {
			signature,
			body: Box::new(body),
		});
		self
	}

	/// A method that records its call and returns nil.
	pub fn noop(self, name: &str, signature: CallableSignature) -> Self {
		self.method(name, signature, |_, _| Ok(CallResult::Returned(Value::Nil)))
	}

	pub fn int(&self, name: &str) -> Option<i64> {
		self.fields.get(name).and_then(Value::as_int)
	}
}

impl ConditionSource for FakeTarget {
	fn condition(&self, name: &str) -> Option<bool> {
		self.conditions.get(name).copied()
	}
}

impl ActionTarget for FakeTarget {
	fn name(&self) -> &str {
		"Fake"
	}

	fn members(&self) -> Rc<[Member]> {
		self.members.clone()
	}

	fn signature(&self, name: &str) -> Option<CallableSignature> {
		self.methods.get(name).map(|m| m.signature.clone())
	}

	fn field_value(&self, name: &str) -> Option<Value> {
		self.fields.get(name).cloned()
	}

	fn call(&mut self, name: &str, args: BoundArguments) -> Result<CallResult, String> {
		let method = self.methods.get_mut(name).ok_or_else(|| format!("no method {name}"))?;
		self.calls.push((name.to_string(), args.to_vec()));
		(method.body)(&mut self.fields, &args)
	}
}

#[derive(Default)]
pub(crate) struct FakeHost {
	pub executing: bool,
	pub activate_all: bool,
	pub activated: HashSet<(String, usize)>,
	pub scheduled: Vec<ResumableHandle>,
	pub dirty: Vec<String>,
	pub diagnostics: Vec<Diagnostic>,
}

impl FakeHost {
	pub fn clicking_all() -> Self {
		Self {
			activate_all: true,
			..Self::default()
		}
	}

	pub fn click(mut self, member: &str, index: usize) -> Self {
		self.activated.insert((member.to_string(), index));
		self
	}
}

impl Environment for FakeHost {
	fn is_executing(&self) -> bool {
		self.executing
	}
}

impl Scheduler for FakeHost {
	fn schedule(&mut self, handle: ResumableHandle) {
		self.scheduled.push(handle);
	}
}

impl PersistenceSink for FakeHost {
	fn mark_dirty(&mut self, target: &str) {
		self.dirty.push(target.to_string());
	}
}

impl DiagnosticSink for FakeHost {
	fn report(&mut self, diagnostic: Diagnostic) {
		self.diagnostics.push(diagnostic);
	}
}

impl Activation for FakeHost {
	fn activated(&self, member: &str, index: usize) -> bool {
		self.activate_all || self.activated.contains(&(member.to_string(), index))
	}
}
