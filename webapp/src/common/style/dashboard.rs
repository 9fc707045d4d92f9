pub const DASHBOARD_STYLES: &str = r#"
.dashboard {
  display: flex;
  flex-direction: column;
  gap: var(--space-8);
}

/* Welcome banner */
.banner {
  display: grid;
  grid-template-columns: 1fr;
}

.banner-text {
  padding: var(--space-8);
  display: flex;
  flex-direction: column;
  justify-content: center;
}

.banner-title {
  font-size: 1.875rem;
  font-weight: 700;
  margin-bottom: var(--space-2);
}

.banner-art {
  padding: var(--space-8);
  display: flex;
  align-items: center;
  justify-content: center;
  background-color: var(--secondary);
  min-height: 250px;
  color: var(--primary);
}

/* Summary strip */
.summary-grid {
  display: grid;
  gap: var(--space-4);
  grid-template-columns: 1fr;
}

.stat-value {
  font-size: 1.5rem;
  font-weight: 700;
}

.profile-heading {
  display: flex;
  align-items: center;
  gap: var(--space-2);
}

.profile-location {
  display: flex;
  align-items: center;
  gap: 6px;
  padding-top: var(--space-1);
}

.truncate {
  overflow: hidden;
  text-overflow: ellipsis;
  white-space: nowrap;
}

/* Feature grid */
.feature-grid {
  display: grid;
  gap: var(--space-6);
  grid-template-columns: 1fr;
}

.feature-card {
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.feature-card:hover {
  box-shadow: var(--shadow-md);
}

.feature-header {
  justify-content: flex-start;
  gap: var(--space-4);
}

.feature-icon {
  background-color: var(--primary-tint);
  color: var(--primary);
  padding: var(--space-3);
  border-radius: var(--radius-full);
  display: flex;
}

.feature-title {
  font-size: 1.25rem;
  font-weight: 600;
}

.feature-link {
  display: inline-block;
  margin-top: var(--space-4);
  font-weight: 500;
}

/* Members dialog */
.member-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: var(--space-3);
}

.member-row {
  display: flex;
  align-items: center;
  gap: var(--space-3);
}

@media (min-width: 640px) {
  .summary-grid { grid-template-columns: repeat(2, 1fr); }
  .feature-grid { grid-template-columns: repeat(2, 1fr); }
  .span-2 { grid-column: span 2; }
}

@media (min-width: 768px) {
  .banner { grid-template-columns: repeat(2, 1fr); }
  .banner-title { font-size: 2.25rem; }
}

@media (min-width: 1024px) {
  .summary-grid { grid-template-columns: repeat(4, 1fr); }
}

@media (min-width: 1280px) {
  .feature-grid { grid-template-columns: repeat(4, 1fr); }
}
"#;
