// Copyright 2025 Irreducible Inc.

use bytes::BufMut;

use super::ProofExpr;
use crate::proof_plans::ProofPlanVariant;

/// An owned proof plan tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofPlan {
	Filter {
		table: u64,
		where_clause: ProofExpr,
		select: Vec<ProofExpr>,
	},
	Empty,
	Table {
		table: u64,
		columns: Vec<u64>,
	},
	Projection {
		input: Box<ProofPlan>,
		select: Vec<ProofExpr>,
	},
	Slice {
		input: Box<ProofPlan>,
		skip: u64,
		fetch: Option<u64>,
	},
	GroupBy {
		table: u64,
		group_by: Vec<u64>,
		where_clause: ProofExpr,
		sums: Vec<ProofExpr>,
	},
	Union(Vec<ProofPlan>),
}

impl ProofPlan {
	pub const fn variant(&self) -> ProofPlanVariant {
		match self {
			Self::Filter { .. } => ProofPlanVariant::Filter,
			Self::Empty => ProofPlanVariant::Empty,
			Self::Table { .. } => ProofPlanVariant::Table,
			Self::Projection { .. } => ProofPlanVariant::Projection,
			Self::Slice { .. } => ProofPlanVariant::Slice,
			Self::GroupBy { .. } => ProofPlanVariant::GroupBy,
			Self::Union(_) => ProofPlanVariant::Union,
		}
	}

	pub fn encode_into(&self, out: &mut Vec<u8>) {
		out.put_u32(self.variant().tag());
		match self {
			Self::Filter {
				table,
				where_clause,
				select,
			} => {
				out.put_u64(*table);
				where_clause.encode_into(out);
				encode_exprs(out, select);
			}
			Self::Empty => {}
			Self::Table { table, columns } => {
				out.put_u64(*table);
				out.put_u64(columns.len() as u64);
				for column in columns {
					out.put_u64(*column);
				}
			}
			Self::Projection { input, select } => {
				input.encode_into(out);
				encode_exprs(out, select);
			}
			Self::Slice { input, skip, fetch } => {
				input.encode_into(out);
				out.put_u64(*skip);
				match fetch {
					Some(fetch) => {
						out.put_u8(1);
						out.put_u64(*fetch);
					}
					None => out.put_u8(0),
				}
			}
			Self::GroupBy {
				table,
				group_by,
				where_clause,
				sums,
			} => {
				out.put_u64(*table);
				out.put_u64(group_by.len() as u64);
				for column in group_by {
					out.put_u64(*column);
				}
				where_clause.encode_into(out);
				encode_exprs(out, sums);
			}
			Self::Union(inputs) => {
				out.put_u64(inputs.len() as u64);
				for input in inputs {
					input.encode_into(out);
				}
			}
		}
	}

	pub fn to_bytes(&self) -> Vec<u8> {
		let mut out = Vec::new();
		self.encode_into(&mut out);
		out
	}
}

fn encode_exprs(out: &mut Vec<u8>, exprs: &[ProofExpr]) {
	out.put_u64(exprs.len() as u64);
	for expr in exprs {
		expr.encode_into(out);
	}
}
