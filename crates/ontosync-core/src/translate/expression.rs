//! Reading and writing class expressions and individuals.

use super::list::{walk_list, write_list};
use super::{Emitter, ReadContext, vocab_triple};
use crate::model::{ClassExpr, EntityKind, Individual};
use crate::vocab::{owl, rdf};
use crate::{Graph, Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;

// =============================================================================
// READING
// =============================================================================

/// Read the class expression rooted at `term`.
///
/// Triples making up anonymous expressions are added to `triples`.
/// Cycles and nesting beyond the configured ceiling trip the recursion
/// guard; shapes with no model counterpart are `UnsupportedConstruct`.
pub fn read_class_expr(
    ctx: &ReadContext<'_>,
    term: &Term,
    triples: &mut BTreeSet<Triple>,
) -> Result<ClassExpr, SyncError> {
    let mut path = Vec::new();
    read_at(ctx, term, 0, &mut path, triples)
}

fn read_at(
    ctx: &ReadContext<'_>,
    term: &Term,
    depth: usize,
    path: &mut Vec<Resource>,
    triples: &mut BTreeSet<Triple>,
) -> Result<ClassExpr, SyncError> {
    match term {
        Term::Iri(iri) => {
            ctx.resolve(iri, EntityKind::Class)?;
            Ok(ClassExpr::Class(iri.clone()))
        }
        Term::Literal(lit) => Err(SyncError::UnsupportedConstruct(format!(
            "literal {lit} in class position"
        ))),
        Term::Blank(node) => {
            let resource = Resource::Blank(node.clone());
            if path.contains(&resource) {
                return Err(SyncError::RecursionGuard {
                    limit: depth,
                    context: format!("class expression {resource} contains itself"),
                });
            }
            let ceiling = ctx.config().max_expression_depth;
            if depth >= ceiling {
                return Err(SyncError::RecursionGuard {
                    limit: ceiling,
                    context: format!("class expression at {resource} nests too deeply"),
                });
            }
            path.push(resource.clone());
            let result = read_anonymous(ctx, &resource, depth, path, triples);
            path.pop();
            result
        }
    }
}

fn read_anonymous(
    ctx: &ReadContext<'_>,
    node: &Resource,
    depth: usize,
    path: &mut Vec<Resource>,
    triples: &mut BTreeSet<Triple>,
) -> Result<ClassExpr, SyncError> {
    let graph = ctx.graph();
    let next = depth.saturating_add(1);
    let max_len = ctx.config().max_list_length;

    for (predicate, union) in [(owl::INTERSECTION_OF, false), (owl::UNION_OF, true)] {
        if let Some(head) = single_object(graph, node, predicate)? {
            let mut operands = BTreeSet::new();
            for item in walk_list(graph, &head, max_len, triples)? {
                operands.insert(read_at(ctx, &item, next, path, triples)?);
            }
            triples.insert(Triple::new(node.clone(), Iri::unchecked(predicate), head));
            include_type(graph, node, owl::CLASS, triples);
            return Ok(if union {
                ClassExpr::UnionOf(operands)
            } else {
                ClassExpr::IntersectionOf(operands)
            });
        }
    }

    if let Some(operand) = single_object(graph, node, owl::COMPLEMENT_OF)? {
        let inner = read_at(ctx, &operand, next, path, triples)?;
        triples.insert(vocab_triple(node.clone(), owl::COMPLEMENT_OF, operand));
        include_type(graph, node, owl::CLASS, triples);
        return Ok(ClassExpr::ComplementOf(Box::new(inner)));
    }

    if let Some(head) = single_object(graph, node, owl::ONE_OF)? {
        let mut members = BTreeSet::new();
        for item in walk_list(graph, &head, max_len, triples)? {
            members.insert(read_individual(ctx, &item)?);
        }
        triples.insert(vocab_triple(node.clone(), owl::ONE_OF, head));
        include_type(graph, node, owl::CLASS, triples);
        return Ok(ClassExpr::OneOf(members));
    }

    if let Some(on_property) = single_object(graph, node, owl::ON_PROPERTY)? {
        let Some(property) = on_property.as_iri().cloned() else {
            return Err(SyncError::UnsupportedConstruct(format!(
                "restriction {node} on an anonymous property"
            )));
        };
        if ctx.property_kind_or_object(&property)? != EntityKind::ObjectProperty {
            return Err(SyncError::UnsupportedConstruct(format!(
                "restriction {node} on non-object property {property}"
            )));
        }

        let expr = if let Some(filler) = single_object(graph, node, owl::SOME_VALUES_FROM)? {
            let inner = read_at(ctx, &filler, next, path, triples)?;
            triples.insert(vocab_triple(node.clone(), owl::SOME_VALUES_FROM, filler));
            ClassExpr::SomeValuesFrom {
                property: property.clone(),
                filler: Box::new(inner),
            }
        } else if let Some(filler) = single_object(graph, node, owl::ALL_VALUES_FROM)? {
            let inner = read_at(ctx, &filler, next, path, triples)?;
            triples.insert(vocab_triple(node.clone(), owl::ALL_VALUES_FROM, filler));
            ClassExpr::AllValuesFrom {
                property: property.clone(),
                filler: Box::new(inner),
            }
        } else if let Some(value) = single_object(graph, node, owl::HAS_VALUE)? {
            let individual = read_individual(ctx, &value)?;
            triples.insert(vocab_triple(node.clone(), owl::HAS_VALUE, value));
            ClassExpr::HasValue {
                property: property.clone(),
                value: individual,
            }
        } else {
            return Err(SyncError::UnsupportedConstruct(format!(
                "restriction {node} has no supported filler"
            )));
        };
        triples.insert(vocab_triple(node.clone(), owl::ON_PROPERTY, property));
        include_type(graph, node, owl::RESTRICTION, triples);
        return Ok(expr);
    }

    Err(SyncError::UnsupportedConstruct(format!(
        "{node} is not a recognized class expression"
    )))
}

/// Read an individual. Named individuals are resolved through the context.
pub fn read_individual(ctx: &ReadContext<'_>, term: &Term) -> Result<Individual, SyncError> {
    match term {
        Term::Iri(iri) => {
            ctx.resolve(iri, EntityKind::NamedIndividual)?;
            Ok(Individual::Named(iri.clone()))
        }
        Term::Blank(node) => Ok(Individual::Anonymous(node.clone())),
        Term::Literal(lit) => Err(SyncError::UnsupportedConstruct(format!(
            "literal {lit} in individual position"
        ))),
    }
}

/// The unique object of `(node, predicate, ?)`, if any.
pub(crate) fn single_object(
    graph: &Graph,
    node: &Resource,
    predicate: &str,
) -> Result<Option<Term>, SyncError> {
    let mut values = graph.objects(node, predicate);
    match values.len() {
        0 => Ok(None),
        1 => Ok(values.pop()),
        n => Err(SyncError::MalformedGraph(format!(
            "{node} has {n} values for <{predicate}>"
        ))),
    }
}

fn include_type(graph: &Graph, node: &Resource, type_iri: &str, triples: &mut BTreeSet<Triple>) {
    let typed = vocab_triple(node.clone(), rdf::TYPE, Iri::unchecked(type_iri));
    if graph.contains(&typed) {
        triples.insert(typed);
    }
}

// =============================================================================
// WRITING
// =============================================================================

/// Write a class expression and return the resource that denotes it.
///
/// Named classes emit nothing. Boolean constructors need at least two
/// operands and `OneOf` at least one member.
pub fn write_class_expr(out: &mut Emitter<'_>, expr: &ClassExpr) -> Result<Resource, SyncError> {
    let ceiling = out.config().max_expression_depth;
    if expr.depth() > ceiling {
        return Err(SyncError::RecursionGuard {
            limit: ceiling,
            context: "class expression nests too deeply to write".to_string(),
        });
    }
    write_expr(out, expr)
}

fn write_expr(out: &mut Emitter<'_>, expr: &ClassExpr) -> Result<Resource, SyncError> {
    let node = match expr {
        ClassExpr::Class(iri) => return Ok(Resource::Iri(iri.clone())),
        ClassExpr::IntersectionOf(operands) | ClassExpr::UnionOf(operands) => {
            if operands.len() < 2 {
                return Err(SyncError::UnsupportedConstruct(format!(
                    "boolean class expression needs two operands, got {}",
                    operands.len()
                )));
            }
            let items = operands
                .iter()
                .map(|op| write_expr(out, op).map(Term::from))
                .collect::<Result<Vec<_>, _>>()?;
            let predicate = if matches!(expr, ClassExpr::UnionOf(_)) {
                owl::UNION_OF
            } else {
                owl::INTERSECTION_OF
            };
            let node = anonymous(out, owl::CLASS);
            let head = write_list(out, &items);
            out.emit(vocab_triple(node.clone(), predicate, head));
            node
        }
        ClassExpr::ComplementOf(operand) => {
            let inner = write_expr(out, operand)?;
            let node = anonymous(out, owl::CLASS);
            out.emit(vocab_triple(node.clone(), owl::COMPLEMENT_OF, inner));
            node
        }
        ClassExpr::OneOf(members) => {
            if members.is_empty() {
                return Err(SyncError::UnsupportedConstruct(
                    "enumeration with no members".to_string(),
                ));
            }
            let items: Vec<Term> = members.iter().map(Individual::to_term).collect();
            let node = anonymous(out, owl::CLASS);
            let head = write_list(out, &items);
            out.emit(vocab_triple(node.clone(), owl::ONE_OF, head));
            node
        }
        ClassExpr::SomeValuesFrom { property, filler }
        | ClassExpr::AllValuesFrom { property, filler } => {
            let inner = write_expr(out, filler)?;
            let predicate = if matches!(expr, ClassExpr::SomeValuesFrom { .. }) {
                owl::SOME_VALUES_FROM
            } else {
                owl::ALL_VALUES_FROM
            };
            let node = restriction(out, property);
            out.emit(vocab_triple(node.clone(), predicate, inner));
            node
        }
        ClassExpr::HasValue { property, value } => {
            let node = restriction(out, property);
            out.emit(vocab_triple(node.clone(), owl::HAS_VALUE, value.to_term()));
            node
        }
    };
    Ok(node)
}

fn anonymous(out: &mut Emitter<'_>, type_iri: &str) -> Resource {
    let node = Resource::Blank(out.fresh());
    out.emit(vocab_triple(node.clone(), rdf::TYPE, Iri::unchecked(type_iri)));
    node
}

fn restriction(out: &mut Emitter<'_>, property: &Iri) -> Resource {
    let node = anonymous(out, owl::RESTRICTION);
    out.emit(vocab_triple(node.clone(), owl::ON_PROPERTY, property.clone()));
    node
}
