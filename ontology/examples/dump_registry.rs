//! Demonstrates loading a small ontology and serializing the registry.
//!
//! Run with: `cargo run --example dump_registry -p vowl-ontology`

use vowl_ontology::loader::turtle;
use vowl_ontology::Registry;

const ONTOLOGY: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix zoo: <http://example.org/zoo#> .

zoo:Animal a owl:Class ; rdfs:label "Animal"@en, "Tier"@de .
zoo:Keeper a owl:Class ; rdfs:label "Keeper"@en .
zoo:Lion a owl:Class ; rdfs:subClassOf zoo:Animal .
zoo:caresFor a owl:ObjectProperty ;
    rdfs:domain zoo:Keeper ;
    rdfs:range zoo:Animal .
zoo:name a owl:DatatypeProperty, owl:FunctionalProperty ;
    rdfs:range xsd:string .
zoo:leo a owl:NamedIndividual, zoo:Lion .
"#;

fn main() {
    let mut registry = Registry::new();
    let summary = match turtle::load_str(ONTOLOGY, &mut registry) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("load failed: {e}");
            return;
        }
    };

    println!("Registry");
    println!("  Classes:              {}", summary.classes);
    println!("  Datatypes:            {}", summary.datatypes);
    println!("  Object properties:    {}", summary.object_properties);
    println!("  Datatype properties:  {}", summary.datatype_properties);
    println!("  Individuals:          {}", summary.individuals);
    println!("  Languages:            {:?}", registry.get_languages());
    println!();

    // Identifiers are handed out on first request.
    for entity in registry.get_entity_map().values() {
        println!(
            "  {:>3}  {:18} {}",
            registry.get_id_for_entity(entity),
            entity.kind().as_str(),
            entity.iri(),
        );
    }
    println!();

    let document = match vowl_ontology::serializer::vowl::to_vowl_json(&registry) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("serialization failed: {e}");
            return;
        }
    };
    let json_str =
        serde_json::to_string_pretty(&document).unwrap_or_else(|e| format!("JSON error: {e}"));
    println!("VOWL output ({} bytes):", json_str.len());
    let preview_end = json_str
        .char_indices()
        .nth(400)
        .map_or(json_str.len(), |(i, _)| i);
    println!("{}...", &json_str[..preview_end]);
}
