//! VOWL JSON serializer.
//!
//! Produces the document consumed by WebVOWL: a `header`, node arrays
//! (`class`, `datatype`) with their attribute arrays, relation arrays
//! (`property`) with their attributes, and `metrics`. Every `id` in the
//! document is an identifier allocated by the registry, and every
//! domain/range/member reference is resolved through it, so a dangling
//! reference fails the whole serialization.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use serde_json::{json, Map, Value};

use crate::entity::{Annotations, Class, ClassKind, Individual, PropertyRef};
use crate::error::RegistryError;
use crate::iri::Iri;
use crate::registry::Registry;

/// Serializes the registry to a VOWL JSON `Value`.
///
/// Entities are visited in IRI order, so the same registry contents always
/// produce the same document and the same identifiers.
///
/// # Errors
///
/// Returns [`RegistryError::NotFound`] if a domain, range, super class or
/// class member names an IRI that is not in the unified table.
pub fn to_vowl_json(registry: &Registry) -> Result<Value, RegistryError> {
    let (class, class_attribute) = classes(registry)?;
    let (datatype, datatype_attribute) = datatypes(registry);
    let (property, property_attribute) = properties(registry)?;
    Ok(json!({
        "header": header(registry),
        "class": class,
        "classAttribute": class_attribute,
        "datatype": datatype,
        "datatypeAttribute": datatype_attribute,
        "property": property,
        "propertyAttribute": property_attribute,
        "metrics": metrics(registry),
    }))
}

fn header(registry: &Registry) -> Value {
    let prefix = registry.synthetic_prefix();
    let base_iris: BTreeSet<&str> = registry
        .get_entity_map()
        .iris()
        .filter(|iri| !iri.as_str().starts_with(prefix))
        .map(base_iri)
        .collect();
    json!({
        "languages": registry.get_languages(),
        "baseIris": base_iris,
    })
}

fn classes(registry: &Registry) -> Result<(Vec<Value>, Vec<Value>), RegistryError> {
    let mut instances: BTreeMap<&Iri, Vec<&Individual>> = BTreeMap::new();
    for individual in registry.get_individual_map().values() {
        for class in &individual.types {
            instances.entry(class).or_default().push(individual);
        }
    }

    let mut nodes = Vec::new();
    let mut attributes = Vec::new();
    for class in registry.get_class_map().values() {
        let id = registry.get_id_for_entity(Rc::clone(class));
        nodes.push(json!({ "id": id, "type": class.kind.as_str() }));

        let mut attribute = Map::new();
        attribute.insert("id".to_owned(), json!(id));
        attribute.insert("iri".to_owned(), json!(class.iri.as_str()));
        if !class.iri.as_str().starts_with(registry.synthetic_prefix()) {
            attribute.insert("baseIri".to_owned(), json!(base_iri(&class.iri)));
        }
        insert_annotations(&mut attribute, &class.annotations);
        let flags = class_flags(class);
        if !flags.is_empty() {
            attribute.insert("attributes".to_owned(), json!(flags));
        }
        insert_ids(&mut attribute, registry, "superClasses", &class.super_classes)?;
        insert_ids(&mut attribute, registry, "equivalent", &class.equivalents)?;
        insert_ids(&mut attribute, registry, "disjointWith", &class.disjoints)?;
        if let Some(key) = member_key(class.kind) {
            insert_ids(&mut attribute, registry, key, &class.members)?;
        }
        if let Some(members) = instances.get(&class.iri) {
            let individuals: Vec<Value> = members
                .iter()
                .map(|individual| {
                    let mut value = Map::new();
                    value.insert("iri".to_owned(), json!(individual.iri.as_str()));
                    insert_annotations(&mut value, &individual.annotations);
                    Value::Object(value)
                })
                .collect();
            attribute.insert("individuals".to_owned(), json!(individuals));
        }
        attributes.push(Value::Object(attribute));
    }
    Ok((nodes, attributes))
}

fn datatypes(registry: &Registry) -> (Vec<Value>, Vec<Value>) {
    let mut nodes = Vec::new();
    let mut attributes = Vec::new();
    for datatype in registry.get_datatype_map().values() {
        let id = registry.get_id_for_entity(Rc::clone(datatype));
        nodes.push(json!({ "id": id, "type": datatype.kind.as_str() }));

        let mut attribute = Map::new();
        attribute.insert("id".to_owned(), json!(id));
        attribute.insert("iri".to_owned(), json!(datatype.iri.as_str()));
        attribute.insert("baseIri".to_owned(), json!(base_iri(&datatype.iri)));
        if datatype.annotations.labels.is_empty() {
            attribute.insert(
                "label".to_owned(),
                json!({ "undefined": datatype.iri.local_name() }),
            );
        }
        insert_annotations(&mut attribute, &datatype.annotations);
        attributes.push(Value::Object(attribute));
    }
    (nodes, attributes)
}

fn properties(registry: &Registry) -> Result<(Vec<Value>, Vec<Value>), RegistryError> {
    let mut relations = Vec::new();
    let mut attributes = Vec::new();
    for property in registry.get_properties() {
        let id = registry.get_id_for_entity(property.clone());
        relations.push(json!({ "id": id, "type": property.type_name() }));

        let mut attribute = Map::new();
        attribute.insert("id".to_owned(), json!(id));
        attribute.insert("iri".to_owned(), json!(property.iri().as_str()));
        attribute.insert("baseIri".to_owned(), json!(base_iri(property.iri())));
        insert_annotations(&mut attribute, property.annotations());
        attribute.insert("domain".to_owned(), endpoint(registry, property.domains())?);
        attribute.insert("range".to_owned(), endpoint(registry, property.ranges())?);

        let (characteristics, super_properties, inverse) = match &property {
            PropertyRef::Object(p) => (&p.characteristics, &p.super_properties, p.inverse.as_ref()),
            PropertyRef::Datatype(p) => (&p.characteristics, &p.super_properties, None),
        };
        let mut flags: Vec<&str> = vec![match &property {
            PropertyRef::Object(_) => "object",
            PropertyRef::Datatype(_) => "datatype",
        }];
        flags.extend(characteristics.iter().map(|c| c.as_str()));
        attribute.insert("attributes".to_owned(), json!(flags));

        // Inverses and super properties may live in another document.
        let super_ids: Vec<String> = super_properties
            .iter()
            .filter_map(|iri| registry.get_property_for_iri(iri).ok())
            .map(|p| registry.get_id_for_entity(p))
            .collect();
        if !super_ids.is_empty() {
            attribute.insert("superproperty".to_owned(), json!(super_ids));
        }
        if let Some(inverse) = inverse.and_then(|iri| registry.get_property_for_iri(iri).ok()) {
            attribute.insert("inverse".to_owned(), json!(registry.get_id_for_entity(inverse)));
        }
        attributes.push(Value::Object(attribute));
    }

    for edge in registry.get_type_of_property_map().values() {
        let id = registry.get_id_for_entity(Rc::clone(edge));
        relations.push(json!({ "id": id, "type": "rdf:type" }));
        attributes.push(json!({
            "id": id,
            "domain": registry.get_id_for_iri(&edge.domain)?,
            "range": registry.get_id_for_iri(&edge.range)?,
        }));
    }
    Ok((relations, attributes))
}

fn metrics(registry: &Registry) -> Value {
    json!({
        "classCount": registry.get_class_map().len(),
        "datatypeCount": registry.get_datatype_map().len(),
        "objectPropertyCount": registry.get_object_property_map().len(),
        "datatypePropertyCount": registry.get_datatype_property_map().len(),
        "individualCount": registry.get_individual_map().len(),
    })
}

fn class_flags(class: &Class) -> Vec<&'static str> {
    match class.kind {
        ClassKind::External => vec!["external"],
        ClassKind::Deprecated => vec!["deprecated"],
        ClassKind::Union | ClassKind::Intersection | ClassKind::Complement => {
            vec!["anonymous"]
        }
        _ => Vec::new(),
    }
}

fn member_key(kind: ClassKind) -> Option<&'static str> {
    match kind {
        ClassKind::Union => Some("union"),
        ClassKind::Intersection => Some("intersection"),
        ClassKind::Complement => Some("complement"),
        _ => None,
    }
}

/// One id for a single endpoint, an array otherwise.
fn endpoint(registry: &Registry, iris: &[Iri]) -> Result<Value, RegistryError> {
    let ids = ids(registry, iris)?;
    Ok(match ids.as_slice() {
        [single] => json!(single),
        _ => json!(ids),
    })
}

fn ids(registry: &Registry, iris: &[Iri]) -> Result<Vec<String>, RegistryError> {
    iris.iter().map(|iri| registry.get_id_for_iri(iri)).collect()
}

fn insert_ids(
    attribute: &mut Map<String, Value>,
    registry: &Registry,
    key: &str,
    iris: &[Iri],
) -> Result<(), RegistryError> {
    if !iris.is_empty() {
        attribute.insert(key.to_owned(), json!(ids(registry, iris)?));
    }
    Ok(())
}

fn insert_annotations(attribute: &mut Map<String, Value>, annotations: &Annotations) {
    if !annotations.labels.is_empty() {
        attribute.insert("label".to_owned(), json!(annotations.labels));
    }
    if !annotations.comments.is_empty() {
        attribute.insert("comment".to_owned(), json!(annotations.comments));
    }
}

/// The namespace part of `iri`: everything before its local name.
fn base_iri(iri: &Iri) -> &str {
    let text = iri.as_str();
    text.trim_end_matches(['/', '#'])
        .rfind(['#', '/', ':'])
        .map_or(text, |pos| &text[..=pos])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Datatype, DatatypeKind, DatatypeProperty, ObjectProperty};

    fn iri(text: &str) -> Iri {
        Iri::new(text).expect("valid iri")
    }

    fn sample() -> Registry {
        let mut registry = Registry::new();
        let mut person = Class::new(iri("http://ex.org/o#Person"), ClassKind::Owl);
        person.annotations.set_label("en", "Person");
        registry.add_class(person).expect("person");
        registry
            .add_class(Class::new(iri("http://ex.org/o#Pet"), ClassKind::Owl))
            .expect("pet");
        registry
            .add_datatype(Datatype::new(
                iri("http://www.w3.org/2001/XMLSchema#string"),
                DatatypeKind::Datatype,
            ))
            .expect("string");
        let mut owns = ObjectProperty::new(iri("http://ex.org/o#owns"));
        owns.domains.push(iri("http://ex.org/o#Person"));
        owns.ranges.push(iri("http://ex.org/o#Pet"));
        registry.add_object_property(owns).expect("owns");
        let mut name = DatatypeProperty::new(iri("http://ex.org/o#name"));
        name.domains.push(iri("http://ex.org/o#Person"));
        name.domains.push(iri("http://ex.org/o#Pet"));
        name.ranges.push(iri("http://www.w3.org/2001/XMLSchema#string"));
        registry.add_datatype_property(name).expect("name");
        registry.add_language("en");
        registry
    }

    #[test]
    fn emits_all_sections() {
        let json = to_vowl_json(&sample()).expect("serializes");
        for key in [
            "header",
            "class",
            "classAttribute",
            "datatype",
            "datatypeAttribute",
            "property",
            "propertyAttribute",
            "metrics",
        ] {
            assert!(!json[key].is_null(), "missing section `{key}`");
        }
        assert_eq!(json["header"]["languages"], json!(["en"]));
        assert_eq!(json["metrics"]["classCount"], json!(2));
    }

    #[test]
    fn ids_are_allocated_in_visit_order() {
        let json = to_vowl_json(&sample()).expect("serializes");
        assert_eq!(json["class"][0], json!({ "id": "0", "type": "owl:Class" }));
        assert_eq!(json["class"][1]["id"], json!("1"));
        assert_eq!(json["datatype"][0]["id"], json!("2"));
        assert_eq!(json["classAttribute"][0]["label"], json!({ "en": "Person" }));
    }

    #[test]
    fn endpoints_collapse_to_single_id() {
        let json = to_vowl_json(&sample()).expect("serializes");
        let attributes = json["propertyAttribute"].as_array().expect("array");
        let name = attributes
            .iter()
            .find(|a| a["iri"] == json!("http://ex.org/o#name"))
            .expect("name attribute");
        assert_eq!(name["domain"], json!(["0", "1"]));
        assert_eq!(name["range"], json!("2"));
        let owns = attributes
            .iter()
            .find(|a| a["iri"] == json!("http://ex.org/o#owns"))
            .expect("owns attribute");
        assert_eq!(owns["domain"], json!("0"));
        assert_eq!(owns["attributes"], json!(["object"]));
    }

    #[test]
    fn base_iri_keeps_the_separator() {
        assert_eq!(base_iri(&iri("http://ex.org/o#Person")), "http://ex.org/o#");
        assert_eq!(base_iri(&iri("http://ex.org/zoo/Lion")), "http://ex.org/zoo/");
    }

    #[test]
    fn dangling_range_aborts() {
        let mut registry = Registry::new();
        let mut property = ObjectProperty::new(iri("http://ex.org/o#p"));
        property.domains.push(iri("http://ex.org/o#Missing"));
        property.ranges.push(iri("http://ex.org/o#Missing"));
        registry.add_object_property(property).expect("property");

        let err = to_vowl_json(&registry).expect_err("dangling");
        assert_eq!(err.iri(), &iri("http://ex.org/o#Missing"));
    }
}
