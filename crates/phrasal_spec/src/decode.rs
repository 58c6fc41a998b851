//! Decoding JSON phrase specifications into typed nodes.
//!
//! Decoding validates the whole request before anything is built: every
//! structural rule is checked here, in the order the expander would meet the
//! nodes, so the first violation reported is the first one expansion would
//! have hit. Errors carry the path from the request root to the offending
//! node.

use phrasal_foundation::{
    Error, ErrorContext, ErrorKind, Feature, FeatureValue, FeatureValues, NodeKind, PathSegment,
    Result, Role,
};
use serde_json::{Map, Value};
use tracing::debug;

use crate::config::ExpansionConfig;
use crate::node::{
    ClauseSpec, CoordinatedPhraseSpec, FeatureSpec, NounPhraseSpec, OneOrMany, PhraseSpec,
    PrepositionPhraseSpec, Slot, VerbPhraseSpec,
};

/// Describes the JSON shape of a value for error messages.
#[must_use]
pub fn shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

// =============================================================================
// Decoder
// =============================================================================

/// Decodes JSON values into [`PhraseSpec`] trees.
pub struct Decoder<'a> {
    config: &'a ExpansionConfig,
    /// Path from the request root to the node being decoded.
    path: Vec<PathSegment>,
    /// Composite nodes currently open.
    depth: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder with the given limits.
    #[must_use]
    pub fn new(config: &'a ExpansionConfig) -> Self {
        Self {
            config,
            path: Vec::new(),
            depth: 0,
        }
    }

    /// Decodes a request document: a mapping with a `sentence` object.
    ///
    /// # Errors
    ///
    /// Returns `MissingSentence` if the request is not a mapping or has no
    /// `sentence` object, and any error of the sentence itself.
    pub fn decode_request<E>(&mut self, request: &Value) -> Result<ClauseSpec<E>> {
        let Some(map) = request.as_object() else {
            return Err(self.error(Error::missing_sentence()));
        };
        for key in map.keys().filter(|key| *key != "sentence") {
            debug!(key = key.as_str(), "ignoring unrecognised request key");
        }
        // A missing sentence is reported at the request root, without a path.
        if !matches!(map.get("sentence"), Some(Value::Object(_))) {
            return Err(self.error(Error::missing_sentence()));
        }
        self.at(PathSegment::Key("sentence".into()), |this| {
            this.decode_sentence(map.get("sentence"))
        })
    }

    /// Decodes a sentence specification, the body of a clause.
    ///
    /// # Errors
    ///
    /// Returns `MissingSentence` if `sentence` is absent or not a mapping.
    pub fn decode_sentence<E>(&mut self, sentence: Option<&Value>) -> Result<ClauseSpec<E>> {
        match sentence {
            Some(Value::Object(body)) => self.nested(|this| this.clause_body(body)),
            _ => Err(self.error(Error::missing_sentence())),
        }
    }

    /// Decodes one node: a word or a composite mapping.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation found in the node.
    pub fn decode_node<E>(&mut self, value: &Value) -> Result<PhraseSpec<E>> {
        match value {
            Value::String(word) => Ok(PhraseSpec::Word(word.clone())),
            Value::Object(map) => self.composite(map),
            other => Err(self.error(Error::invalid_leaf(shape(other)))),
        }
    }

    fn composite<E>(&mut self, map: &Map<String, Value>) -> Result<PhraseSpec<E>> {
        let kind = match map.get("type") {
            None => return Err(self.error(Error::missing_type())),
            Some(Value::String(tag)) => NodeKind::from_tag(tag)
                .ok_or_else(|| self.error(Error::unrecognized_node_type(tag.as_str())))?,
            Some(other) => {
                return Err(self.error(Error::new(ErrorKind::InvalidSlotValue {
                    role: "type".to_string(),
                    expected: "a string",
                    found: shape(other),
                })));
            }
        };

        self.check_keys(map, kind, |key| kind.keys().iter().any(|known| *known == key))?;
        self.nested(|this| match kind {
            NodeKind::Clause => this.clause(map).map(PhraseSpec::Clause),
            NodeKind::NounPhrase => this.noun_phrase(map).map(PhraseSpec::NounPhrase),
            NodeKind::VerbPhrase => this.verb_phrase(map).map(PhraseSpec::VerbPhrase),
            NodeKind::PrepositionPhrase => {
                this.preposition_phrase(map).map(PhraseSpec::from)
            }
            NodeKind::CoordinatedPhrase => {
                this.coordinated_phrase(map).map(PhraseSpec::CoordinatedPhrase)
            }
        })
    }

    // -------------------------------------------------------------------------
    // Node kinds
    // -------------------------------------------------------------------------

    fn clause<E>(&mut self, map: &Map<String, Value>) -> Result<ClauseSpec<E>> {
        self.at(PathSegment::Key("spec".into()), |this| match map.get("spec") {
            Some(Value::Object(body)) => this.clause_body(body),
            _ => Err(this.error(Error::missing_sentence())),
        })
    }

    fn clause_body<E>(&mut self, body: &Map<String, Value>) -> Result<ClauseSpec<E>> {
        self.check_keys(body, NodeKind::Clause, |key| {
            Role::CLAUSE.iter().any(|role| role.key() == key)
        })?;
        let mut spec = ClauseSpec::new();
        spec.slots = self.slots(body, &Role::CLAUSE)?;
        Ok(spec)
    }

    fn noun_phrase<E>(&mut self, map: &Map<String, Value>) -> Result<NounPhraseSpec<E>> {
        let head = self.required(map, NodeKind::NounPhrase, "head")?;
        let head: PhraseSpec<E> = self.at(PathSegment::Key("head".into()), |this| this.decode_node(head))?;
        let mut spec = NounPhraseSpec::new(head);
        spec.slots = self.slots(map, &Role::NOUN_PHRASE)?;
        Ok(spec)
    }

    fn verb_phrase<E>(&mut self, map: &Map<String, Value>) -> Result<VerbPhraseSpec<E>> {
        let head = self.required(map, NodeKind::VerbPhrase, "head")?;
        let head: PhraseSpec<E> = self.at(PathSegment::Key("head".into()), |this| this.decode_node(head))?;
        let mut spec = VerbPhraseSpec::new(head);
        spec.slots = self.slots(map, &Role::VERB_PHRASE)?;
        Ok(spec)
    }

    fn preposition_phrase<E>(&mut self, map: &Map<String, Value>) -> Result<PrepositionPhraseSpec<E>> {
        let noun = self.required(map, NodeKind::PrepositionPhrase, "noun")?;
        let noun: PhraseSpec<E> = self.at(PathSegment::Key("noun".into()), |this| this.decode_node(noun))?;
        let preposition = self.required(map, NodeKind::PrepositionPhrase, "preposition")?;
        let preposition = self.at(PathSegment::Key("preposition".into()), |this| {
            this.one_or_many(preposition)
        })?;
        Ok(PrepositionPhraseSpec::new(preposition, noun))
    }

    fn coordinated_phrase<E>(&mut self, map: &Map<String, Value>) -> Result<CoordinatedPhraseSpec<E>> {
        let coordinates = self.required(map, NodeKind::CoordinatedPhrase, "coordinates")?;
        let coordinates = self
            .at(PathSegment::Key("coordinates".into()), |this| {
                this.one_or_many(coordinates)
            })?
            .into_vec();
        if coordinates.is_empty() {
            return Err(self.error(Error::new(ErrorKind::EmptyRequiredField {
                node: NodeKind::CoordinatedPhrase,
                field: "coordinates",
            })));
        }

        let mut spec = CoordinatedPhraseSpec::new(coordinates);
        match map.get("conjunction") {
            None => {}
            Some(Value::String(conjunction)) => spec.conjunction = Some(conjunction.clone()),
            Some(other) => {
                let found = shape(other);
                return Err(self.at(PathSegment::Key("conjunction".into()), |this| {
                    this.error(Error::new(ErrorKind::InvalidSlotValue {
                        role: "conjunction".to_string(),
                        expected: "a string",
                        found,
                    }))
                }));
            }
        }
        Ok(spec)
    }

    // -------------------------------------------------------------------------
    // Slots
    // -------------------------------------------------------------------------

    /// Decodes the optional slots of a node, in `order`.
    fn slots<E>(&mut self, map: &Map<String, Value>, order: &[Role]) -> Result<Vec<Slot<E>>> {
        let mut slots = Vec::new();
        for &role in order {
            let Some(value) = map.get(role.key()) else {
                continue;
            };
            let slot = self.at(PathSegment::Key(role.key().into()), |this| {
                if role == Role::Features {
                    this.features(value).map(Slot::Features)
                } else {
                    this.one_or_many(value)
                        .map(|value| Slot::Phrases { role, value })
                }
            })?;
            slots.push(slot);
        }
        Ok(slots)
    }

    fn one_or_many<E>(&mut self, value: &Value) -> Result<OneOrMany<PhraseSpec<E>>> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| self.at(PathSegment::Index(i), |this| this.decode_node(item)))
                .collect::<Result<Vec<_>>>()
                .map(OneOrMany::Many),
            other => self.decode_node(other).map(OneOrMany::One),
        }
    }

    fn features(&mut self, value: &Value) -> Result<FeatureSpec> {
        let Value::Object(map) = value else {
            return Err(self.error(Error::new(ErrorKind::InvalidSlotValue {
                role: Role::Features.key().to_string(),
                expected: "a mapping of feature names to values",
                found: shape(value),
            })));
        };
        let mut features = FeatureSpec::new();
        for (name, raw) in map {
            let (feature, value) = self.at(PathSegment::Key(name.clone()), |this| {
                this.feature(name, raw)
            })?;
            features.push(feature, value);
        }
        Ok(features)
    }

    /// Resolves one feature assignment through the feature table.
    ///
    /// Symbolic features accept a JSON boolean in place of `"true"`/`"false"`;
    /// any other non-string value is an unrecognised value.
    fn feature(&self, name: &str, raw: &Value) -> Result<(Feature, FeatureValue)> {
        let entry = Feature::lookup(name).map_err(|err| self.error(err))?;
        let resolved = match (raw, &entry.values) {
            (Value::String(text), _) => entry.resolve(text),
            (Value::Bool(flag), FeatureValues::Symbolic(_)) => entry.resolve(&flag.to_string()),
            (other, FeatureValues::Symbolic(_)) => entry.resolve(&other.to_string()),
            (other, FeatureValues::FreeText) => Err(Error::new(ErrorKind::InvalidSlotValue {
                role: name.to_string(),
                expected: "a string",
                found: shape(other),
            })),
        };
        resolved
            .map(|value| (entry.feature, value))
            .map_err(|err| self.error(err))
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn required<'v>(
        &self,
        map: &'v Map<String, Value>,
        node: NodeKind,
        field: &'static str,
    ) -> Result<&'v Value> {
        map.get(field)
            .ok_or_else(|| self.error(Error::missing_field(node, field)))
    }

    fn check_keys(
        &self,
        map: &Map<String, Value>,
        node: NodeKind,
        known: impl Fn(&str) -> bool,
    ) -> Result<()> {
        for key in map.keys() {
            if key == "type" || known(key) {
                continue;
            }
            if self.config.strict_keys {
                return Err(self.error(Error::new(ErrorKind::UnrecognizedKey {
                    node,
                    key: key.clone(),
                })));
            }
            debug!(
                %node,
                key = key.as_str(),
                path = %ErrorContext::at(&self.path).path_string(),
                "ignoring unrecognised key"
            );
        }
        Ok(())
    }

    /// Runs `f` with `segment` appended to the current path.
    fn at<T>(&mut self, segment: PathSegment, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment);
        let result = f(self);
        self.path.pop();
        result
    }

    /// Runs `f` inside one more composite node, enforcing the nesting limit.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth >= self.config.max_depth {
            return Err(self.error(Error::nesting_too_deep(self.config.max_depth)));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Attaches the current path to an error that has none yet.
    fn error(&self, err: Error) -> Error {
        if err.context.is_some() {
            err
        } else {
            err.with_context(ErrorContext::at(&self.path))
        }
    }
}

// =============================================================================
// Convenience functions
// =============================================================================

/// Decodes a request document.
///
/// # Errors
///
/// See [`Decoder::decode_request`].
pub fn decode_request<E>(request: &Value, config: &ExpansionConfig) -> Result<ClauseSpec<E>> {
    Decoder::new(config).decode_request(request)
}

/// Decodes a single node.
///
/// # Errors
///
/// See [`Decoder::decode_node`].
pub fn decode_node<E>(node: &Value, config: &ExpansionConfig) -> Result<PhraseSpec<E>> {
    Decoder::new(config).decode_node(node)
}
